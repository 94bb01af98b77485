use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::auth_integration::interfaces::acl::authentication_facade::{
    AuthIntegrationError, AuthenticationFacade, IssuedAccessToken, VerifiedCallerContext,
};

#[derive(Debug, Deserialize, Serialize)]
struct AccessTokenClaims {
    id: i64,
    role: String,
    exp: u64,
}

#[derive(Clone)]
struct CachedVerification {
    context: VerifiedCallerContext,
    expires_at: Instant,
}

pub struct JwtAuthenticationFacadeImpl {
    secret: String,
    token_lifetime: Duration,
    cache_ttl: Duration,
    cache: RwLock<HashMap<String, CachedVerification>>,
}

impl JwtAuthenticationFacadeImpl {
    pub fn new(secret: String, token_lifetime: Duration) -> Self {
        Self::new_with_cache_ttl(secret, token_lifetime, Duration::from_secs(30))
    }

    pub fn new_with_cache_ttl(
        secret: String,
        token_lifetime: Duration,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            secret,
            token_lifetime,
            cache_ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn token_hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached(&self, token_hash: &str) -> Option<VerifiedCallerContext> {
        let guard = self.cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.context.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, token_hash: String, context: VerifiedCallerContext) {
        let mut guard = self.cache.write().await;
        guard.insert(
            token_hash,
            CachedVerification {
                context,
                expires_at: Instant::now() + self.cache_ttl,
            },
        );
    }
}

#[async_trait]
impl AuthenticationFacade for JwtAuthenticationFacadeImpl {
    async fn issue_access_token(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<IssuedAccessToken, AuthIntegrationError> {
        let expires_in_seconds = self.token_lifetime.as_secs();
        let claims = AccessTokenClaims {
            id: user_id,
            role: role_name.to_string(),
            exp: Utc::now().timestamp() as u64 + expires_in_seconds,
        };

        let access_token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthIntegrationError::TokenIssuance(e.to_string()))?;

        Ok(IssuedAccessToken {
            access_token,
            expires_in_seconds,
        })
    }

    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedCallerContext, AuthIntegrationError> {
        if access_token.trim().is_empty() {
            return Err(AuthIntegrationError::InvalidToken(
                "access token is empty".to_string(),
            ));
        }

        let token_hash = Self::token_hash(access_token);

        if let Some(cached) = self.get_cached(&token_hash).await {
            return Ok(cached);
        }

        let decoded = decode::<AccessTokenClaims>(
            access_token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthIntegrationError::InvalidToken(e.to_string()))?;

        let context = VerifiedCallerContext {
            user_id: decoded.claims.id,
            role_name: decoded.claims.role,
            exp_epoch_seconds: decoded.claims.exp,
        };

        self.set_cache(token_hash, context.clone()).await;

        Ok(context)
    }
}
