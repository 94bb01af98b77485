use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth_integration::application::acl::jwt_authentication_facade_impl::JwtAuthenticationFacadeImpl,
    config::app_config::AppConfig,
    rooms::{
        application::{
            command_services::rooms_command_service_impl::RoomsCommandServiceImpl,
            query_services::rooms_query_service_impl::RoomsQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_room_repository_impl::SqlxRoomRepositoryImpl,
        interfaces::rest::controllers::rooms_rest_controller::{RoomsRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_rooms_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let room_repository = Arc::new(SqlxRoomRepositoryImpl::new(pool));
    room_repository
        .ensure_schema()
        .await
        .map_err(|e| e.to_string())?;

    let command_service = Arc::new(RoomsCommandServiceImpl::new(room_repository.clone()));
    let query_service = Arc::new(RoomsQueryServiceImpl::new(room_repository));

    let authentication_facade = Arc::new(JwtAuthenticationFacadeImpl::new(
        config.jwt_secret.clone(),
        Duration::from_secs(config.jwt_expiry_minutes * 60),
    ));

    Ok(router(RoomsRestControllerState {
        command_service,
        query_service,
        authentication_facade,
    }))
}
