use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth_integration::application::acl::jwt_authentication_facade_impl::JwtAuthenticationFacadeImpl,
    config::app_config::AppConfig,
    users::{
        application::{
            command_services::users_command_service_impl::UsersCommandServiceImpl,
            query_services::users_query_service_impl::UsersQueryServiceImpl,
        },
        infrastructure::{
            persistence::repositories::postgres::sqlx_user_account_repository_impl::SqlxUserAccountRepositoryImpl,
            security::argon2_password_hasher_impl::Argon2PasswordHasherImpl,
        },
        interfaces::rest::controllers::users_rest_controller::{UsersRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_users_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let user_repository = Arc::new(SqlxUserAccountRepositoryImpl::new(pool));
    user_repository
        .ensure_schema()
        .await
        .map_err(|e| e.to_string())?;

    let password_hasher = Arc::new(Argon2PasswordHasherImpl::new());

    let authentication_facade = Arc::new(JwtAuthenticationFacadeImpl::new(
        config.jwt_secret.clone(),
        Duration::from_secs(config.jwt_expiry_minutes * 60),
    ));

    let command_service = Arc::new(UsersCommandServiceImpl::new(
        user_repository.clone(),
        password_hasher.clone(),
    ));
    let query_service = Arc::new(UsersQueryServiceImpl::new(
        user_repository,
        password_hasher,
        authentication_facade.clone(),
    ));

    Ok(router(UsersRestControllerState {
        command_service,
        query_service,
        authentication_facade,
    }))
}
