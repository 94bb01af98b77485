use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    access_policy::domain::model::{
        enums::role::Role, value_objects::caller_identity::CallerIdentity,
    },
    auth_integration::interfaces::acl::authentication_facade::AuthenticationFacade,
    users::{
        domain::{
            model::{
                enums::users_domain_error::UsersDomainError, queries::login_query::LoginQuery,
            },
            services::users_query_service::{LoginResult, UsersQueryService},
        },
        infrastructure::{
            persistence::repositories::user_account_repository::{
                UserAccountRecord, UserAccountRepository,
            },
            security::password_hasher::PasswordHasher,
        },
    },
};

pub struct UsersQueryServiceImpl {
    user_repository: Arc<dyn UserAccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    authentication_facade: Arc<dyn AuthenticationFacade>,
}

impl UsersQueryServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserAccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        authentication_facade: Arc<dyn AuthenticationFacade>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            authentication_facade,
        }
    }

    fn require_admin_or_auditor(caller: &CallerIdentity) -> Result<(), UsersDomainError> {
        match caller.role() {
            Some(Role::Admin) | Some(Role::Auditor) => Ok(()),
            _ => Err(UsersDomainError::AccessDenied(
                "not authorized".to_string(),
            )),
        }
    }
}

#[async_trait]
impl UsersQueryService for UsersQueryServiceImpl {
    async fn handle_login(&self, query: LoginQuery) -> Result<LoginResult, UsersDomainError> {
        let user = self
            .user_repository
            .find_by_username(&query.username)
            .await?
            .ok_or(UsersDomainError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(&query.password, &user.password_hash)?;

        if !password_matches {
            return Err(UsersDomainError::InvalidCredentials);
        }

        let issued = self
            .authentication_facade
            .issue_access_token(user.id, &user.role_name)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        info!(user_id = user.id, "user logged in");

        Ok(LoginResult {
            access_token: issued.access_token,
            token_type: "bearer".to_string(),
            role_name: user.role_name,
            user_id: user.id,
        })
    }

    async fn handle_get_profile(
        &self,
        caller: &CallerIdentity,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let user_id = caller.user_id.ok_or_else(|| {
            UsersDomainError::AccessDenied("authenticated caller required".to_string())
        })?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(UsersDomainError::UserNotFound)
    }

    async fn handle_list_users(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<UserAccountRecord>, UsersDomainError> {
        Self::require_admin_or_auditor(caller)?;

        self.user_repository.list_users().await
    }

    async fn handle_get_user_by_username(
        &self,
        caller: &CallerIdentity,
        username: &str,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        Self::require_admin_or_auditor(caller)?;

        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or(UsersDomainError::UserNotFound)
    }
}
