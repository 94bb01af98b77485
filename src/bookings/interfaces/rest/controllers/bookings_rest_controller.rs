use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use validator::Validate;

use crate::{
    auth_integration::interfaces::acl::authentication_facade::AuthenticationFacade,
    bookings::{
        domain::{
            model::{
                commands::{
                    cancel_booking_command::CancelBookingCommand,
                    create_booking_command::{CreateBookingCommand, CreateBookingCommandParts},
                    update_booking_command::UpdateBookingCommand,
                },
                enums::bookings_domain_error::BookingsDomainError,
                queries::{
                    check_availability_query::{
                        CheckAvailabilityQuery, CheckAvailabilityQueryParts,
                    },
                    user_booking_history_query::UserBookingHistoryQuery,
                },
            },
            services::{
                bookings_command_service::BookingsCommandService,
                bookings_query_service::BookingsQueryService,
            },
        },
        infrastructure::persistence::repositories::booking_repository::BookingRecord,
        interfaces::rest::resources::{
            availability_resource::{AvailabilityQueryResource, AvailabilityResponseResource},
            booking_resource::BookingResource,
            bookings_error_response_resource::BookingsErrorResponseResource,
            create_booking_request_resource::CreateBookingRequestResource,
            update_booking_request_resource::UpdateBookingRequestResource,
        },
    },
    shared::interfaces::rest::caller_identity_extractor::{
        CallerIdentityError, extract_caller_identity,
    },
};

#[derive(Clone)]
pub struct BookingsRestControllerState {
    pub command_service: Arc<dyn BookingsCommandService>,
    pub query_service: Arc<dyn BookingsQueryService>,
    pub authentication_facade: Arc<dyn AuthenticationFacade>,
}

pub fn router(state: BookingsRestControllerState) -> Router {
    Router::new()
        .route("/bookings", get(get_all_bookings))
        .route("/bookings", post(create_booking))
        .route("/bookings/:booking_id", put(update_booking))
        .route("/bookings/:booking_id", delete(cancel_booking))
        .route("/availability", get(check_availability))
        .route("/bookings/user/:user_id", get(get_user_booking_history))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(
        ("x-role" = Option<String>, Header, description = "Caller role when no bearer token is sent"),
        ("x-user-id" = Option<i64>, Header, description = "Caller user id when no bearer token is sent")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "All bookings", body = [BookingResource]),
        (status = 403, description = "Caller role may not list bookings", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn get_all_bookings(
    State(state): State<BookingsRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResource>>, (StatusCode, Json<BookingsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let bookings = state
        .query_service
        .handle_list_bookings(&caller)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(bookings.iter().map(to_booking_resource).collect()))
}

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBookingRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Booking created", body = BookingResource),
        (status = 400, description = "Invalid payload or time interval", body = BookingsErrorResponseResource),
        (status = 403, description = "Caller may not create this booking", body = BookingsErrorResponseResource),
        (status = 409, description = "Room already booked in this time slot", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn create_booking(
    State(state): State<BookingsRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequestResource>,
) -> Result<
    (StatusCode, Json<BookingResource>),
    (StatusCode, Json<BookingsErrorResponseResource>),
> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let start_time = parse_datetime(&request.start_time).ok_or_else(invalid_datetime)?;
    let end_time = parse_datetime(&request.end_time).ok_or_else(invalid_datetime)?;

    let command = CreateBookingCommand::new(CreateBookingCommandParts {
        user_id: request.user_id,
        room_id: request.room_id,
        start_time,
        end_time,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_create_booking(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_booking_resource(&record))))
}

#[utoipa::path(
    put,
    path = "/bookings/{booking_id}",
    tag = "bookings",
    params(
        ("booking_id" = i64, Path, description = "Booking to update")
    ),
    request_body = UpdateBookingRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Booking updated", body = BookingResource),
        (status = 400, description = "Invalid time interval", body = BookingsErrorResponseResource),
        (status = 403, description = "Caller may not update this booking", body = BookingsErrorResponseResource),
        (status = 404, description = "Booking not found", body = BookingsErrorResponseResource),
        (status = 409, description = "Room already booked in this time slot", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn update_booking(
    State(state): State<BookingsRestControllerState>,
    Path(booking_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateBookingRequestResource>,
) -> Result<Json<BookingResource>, (StatusCode, Json<BookingsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let start_time = match request.start_time.as_deref() {
        Some(raw) => Some(parse_datetime(raw).ok_or_else(invalid_datetime)?),
        None => None,
    };
    let end_time = match request.end_time.as_deref() {
        Some(raw) => Some(parse_datetime(raw).ok_or_else(invalid_datetime)?),
        None => None,
    };

    let command = UpdateBookingCommand {
        booking_id,
        room_id: request.room_id,
        start_time,
        end_time,
    };

    let record = state
        .command_service
        .handle_update_booking(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_booking_resource(&record)))
}

#[utoipa::path(
    delete,
    path = "/bookings/{booking_id}",
    tag = "bookings",
    params(
        ("booking_id" = i64, Path, description = "Booking to cancel"),
        ("x-mfa-code" = String, Header, description = "MFA code required for cancellation")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingResource),
        (status = 403, description = "Caller may not cancel this booking or MFA failed", body = BookingsErrorResponseResource),
        (status = 404, description = "Booking not found", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingsRestControllerState>,
    Path(booking_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<BookingResource>, (StatusCode, Json<BookingsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let mfa_code = headers
        .get("x-mfa-code")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let command = CancelBookingCommand {
        booking_id,
        mfa_code,
    };

    let record = state
        .command_service
        .handle_cancel_booking(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_booking_resource(&record)))
}

#[utoipa::path(
    get,
    path = "/availability",
    tag = "bookings",
    params(
        ("room_id" = i64, Query, description = "Room to check"),
        ("start_time" = String, Query, description = "Interval start in ISO format"),
        ("end_time" = String, Query, description = "Interval end in ISO format")
    ),
    responses(
        (status = 200, description = "Room availability for the interval", body = AvailabilityResponseResource),
        (status = 400, description = "Missing or invalid parameters", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn check_availability(
    State(state): State<BookingsRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<AvailabilityQueryResource>,
) -> Result<Json<AvailabilityResponseResource>, (StatusCode, Json<BookingsErrorResponseResource>)>
{
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let start_time = parse_datetime(&query.start_time).ok_or_else(invalid_datetime)?;
    let end_time = parse_datetime(&query.end_time).ok_or_else(invalid_datetime)?;

    let availability_query = CheckAvailabilityQuery::new(CheckAvailabilityQueryParts {
        room_id: query.room_id,
        start_time,
        end_time,
    })
    .map_err(map_domain_error)?;

    let availability = state
        .query_service
        .handle_check_availability(&caller, availability_query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AvailabilityResponseResource {
        room_id: availability.room_id,
        available: availability.available,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings/user/{user_id}",
    tag = "bookings",
    params(
        ("user_id" = i64, Path, description = "User whose booking history is requested")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Booking history for the user", body = [BookingResource]),
        (status = 403, description = "Caller may not view this history", body = BookingsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingsErrorResponseResource)
    )
)]
pub async fn get_user_booking_history(
    State(state): State<BookingsRestControllerState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResource>>, (StatusCode, Json<BookingsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let bookings = state
        .query_service
        .handle_user_booking_history(&caller, UserBookingHistoryQuery { user_id })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(bookings.iter().map(to_booking_resource).collect()))
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}

fn to_booking_resource(record: &BookingRecord) -> BookingResource {
    BookingResource {
        id: record.id,
        user_id: record.user_id,
        room_id: record.room_id,
        start_time: record.start_time.to_rfc3339(),
        end_time: record.end_time.to_rfc3339(),
        status: record.status.as_str().to_string(),
        created_at: record.created_at.to_rfc3339(),
    }
}

fn invalid_datetime() -> (StatusCode, Json<BookingsErrorResponseResource>) {
    bad_request("Invalid datetime format. Use ISO format.".to_string())
}

fn bad_request(message: String) -> (StatusCode, Json<BookingsErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        Json(BookingsErrorResponseResource { message }),
    )
}

fn map_caller_error(
    error: CallerIdentityError,
) -> (StatusCode, Json<BookingsErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(BookingsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(
    error: BookingsDomainError,
) -> (StatusCode, Json<BookingsErrorResponseResource>) {
    let status = match error {
        BookingsDomainError::InvalidTimeSlot => StatusCode::BAD_REQUEST,
        BookingsDomainError::BookingNotFound => StatusCode::NOT_FOUND,
        BookingsDomainError::RoomUnavailable => StatusCode::CONFLICT,
        BookingsDomainError::AccessDenied(_) | BookingsDomainError::MfaRequired => {
            StatusCode::FORBIDDEN
        }
        BookingsDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(BookingsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
