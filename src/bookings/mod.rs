use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    auth_integration::application::acl::jwt_authentication_facade_impl::JwtAuthenticationFacadeImpl,
    bookings::{
        application::{
            command_services::bookings_command_service_impl::BookingsCommandServiceImpl,
            query_services::bookings_query_service_impl::BookingsQueryServiceImpl,
        },
        infrastructure::{
            notifications::logging_booking_notifier_impl::LoggingBookingNotifierImpl,
            persistence::repositories::postgres::sqlx_booking_repository_impl::SqlxBookingRepositoryImpl,
        },
        interfaces::rest::controllers::bookings_rest_controller::{
            BookingsRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_bookings_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let booking_repository = Arc::new(SqlxBookingRepositoryImpl::new(pool));
    booking_repository
        .ensure_schema()
        .await
        .map_err(|e| e.to_string())?;

    let booking_notifier = Arc::new(LoggingBookingNotifierImpl::new());

    let command_service = Arc::new(BookingsCommandServiceImpl::new(
        booking_repository.clone(),
        booking_notifier,
        config.mfa_cancel_code.clone(),
    ));
    let query_service = Arc::new(BookingsQueryServiceImpl::new(booking_repository));

    let authentication_facade = Arc::new(JwtAuthenticationFacadeImpl::new(
        config.jwt_secret.clone(),
        Duration::from_secs(config.jwt_expiry_minutes * 60),
    ));

    Ok(router(BookingsRestControllerState {
        command_service,
        query_service,
        authentication_facade,
    }))
}
