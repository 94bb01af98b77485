use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    users::{
        domain::model::{
            enums::users_domain_error::UsersDomainError, queries::login_query::LoginQuery,
        },
        infrastructure::persistence::repositories::user_account_repository::UserAccountRecord,
    },
};

#[derive(Clone, Debug)]
pub struct LoginResult {
    pub access_token: String,
    pub token_type: String,
    pub role_name: String,
    pub user_id: i64,
}

#[async_trait]
pub trait UsersQueryService: Send + Sync {
    async fn handle_login(&self, query: LoginQuery) -> Result<LoginResult, UsersDomainError>;

    async fn handle_get_profile(
        &self,
        caller: &CallerIdentity,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn handle_list_users(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<UserAccountRecord>, UsersDomainError>;

    async fn handle_get_user_by_username(
        &self,
        caller: &CallerIdentity,
        username: &str,
    ) -> Result<UserAccountRecord, UsersDomainError>;
}
