use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct VerifiedCallerContext {
    pub user_id: i64,
    pub role_name: String,
    pub exp_epoch_seconds: u64,
}

#[derive(Clone, Debug)]
pub struct IssuedAccessToken {
    pub access_token: String,
    pub expires_in_seconds: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthIntegrationError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token issuance failed: {0}")]
    TokenIssuance(String),
}

#[async_trait]
pub trait AuthenticationFacade: Send + Sync {
    async fn issue_access_token(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<IssuedAccessToken, AuthIntegrationError>;

    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedCallerContext, AuthIntegrationError>;
}
