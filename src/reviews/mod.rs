use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth_integration::application::acl::jwt_authentication_facade_impl::JwtAuthenticationFacadeImpl,
    config::app_config::AppConfig,
    reviews::{
        application::{
            command_services::reviews_command_service_impl::ReviewsCommandServiceImpl,
            query_services::reviews_query_service_impl::ReviewsQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_review_repository_impl::SqlxReviewRepositoryImpl,
        interfaces::rest::controllers::reviews_rest_controller::{
            ReviewsRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_reviews_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let review_repository = Arc::new(SqlxReviewRepositoryImpl::new(pool));
    review_repository
        .ensure_schema()
        .await
        .map_err(|e| e.to_string())?;

    let command_service = Arc::new(ReviewsCommandServiceImpl::new(review_repository.clone()));
    let query_service = Arc::new(ReviewsQueryServiceImpl::new(review_repository));

    let authentication_facade = Arc::new(JwtAuthenticationFacadeImpl::new(
        config.jwt_secret.clone(),
        Duration::from_secs(config.jwt_expiry_minutes * 60),
    ));

    Ok(router(ReviewsRestControllerState {
        command_service,
        query_service,
        authentication_facade,
    }))
}
