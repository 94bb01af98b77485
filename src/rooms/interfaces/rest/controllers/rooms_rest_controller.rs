use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
};
use validator::Validate;

use crate::{
    auth_integration::interfaces::acl::authentication_facade::AuthenticationFacade,
    rooms::{
        domain::{
            model::{
                commands::{
                    create_room_command::{CreateRoomCommand, CreateRoomCommandParts},
                    update_room_command::{UpdateRoomCommand, UpdateRoomCommandParts},
                },
                enums::rooms_domain_error::RoomsDomainError,
            },
            services::{
                rooms_command_service::RoomsCommandService,
                rooms_query_service::RoomsQueryService,
            },
        },
        infrastructure::persistence::repositories::room_repository::RoomRecord,
        interfaces::rest::resources::{
            create_room_request_resource::CreateRoomRequestResource,
            room_resource::RoomResource,
            rooms_error_response_resource::RoomsErrorResponseResource,
            update_room_request_resource::UpdateRoomRequestResource,
        },
    },
    shared::interfaces::rest::caller_identity_extractor::{
        CallerIdentityError, extract_caller_identity,
    },
};

#[derive(Clone)]
pub struct RoomsRestControllerState {
    pub command_service: Arc<dyn RoomsCommandService>,
    pub query_service: Arc<dyn RoomsQueryService>,
    pub authentication_facade: Arc<dyn AuthenticationFacade>,
}

pub fn router(state: RoomsRestControllerState) -> Router {
    Router::new()
        .route("/rooms", get(get_all_rooms))
        .route("/rooms", post(create_room))
        .route("/rooms/:room_id", get(get_room))
        .route("/rooms/:room_id", put(update_room))
        .route("/rooms/:room_id", delete(delete_room))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "All rooms", body = [RoomResource]),
        (status = 500, description = "Infrastructure error", body = RoomsErrorResponseResource)
    )
)]
pub async fn get_all_rooms(
    State(state): State<RoomsRestControllerState>,
) -> Result<Json<Vec<RoomResource>>, (StatusCode, Json<RoomsErrorResponseResource>)> {
    let rooms = state
        .query_service
        .handle_list_rooms()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(rooms.iter().map(to_room_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i64, Path, description = "Room to fetch")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResource),
        (status = 404, description = "Room not found", body = RoomsErrorResponseResource)
    )
)]
pub async fn get_room(
    State(state): State<RoomsRestControllerState>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomResource>, (StatusCode, Json<RoomsErrorResponseResource>)> {
    let room = state
        .query_service
        .handle_get_room(room_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_room_resource(&room)))
}

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    request_body = CreateRoomRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Room created", body = RoomResource),
        (status = 400, description = "Invalid payload or duplicate room", body = RoomsErrorResponseResource),
        (status = 403, description = "Admin or facility manager role required", body = RoomsErrorResponseResource)
    )
)]
pub async fn create_room(
    State(state): State<RoomsRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateRoomRequestResource>,
) -> Result<(StatusCode, Json<RoomResource>), (StatusCode, Json<RoomsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RoomsErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = CreateRoomCommand::new(CreateRoomCommandParts {
        name: request.name,
        capacity: request.capacity,
        equipment: request.equipment,
        location: request.location,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_create_room(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_room_resource(&record))))
}

#[utoipa::path(
    put,
    path = "/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i64, Path, description = "Room to update")
    ),
    request_body = UpdateRoomRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Room updated", body = RoomResource),
        (status = 403, description = "Admin or facility manager role required", body = RoomsErrorResponseResource),
        (status = 404, description = "Room not found", body = RoomsErrorResponseResource)
    )
)]
pub async fn update_room(
    State(state): State<RoomsRestControllerState>,
    Path(room_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateRoomRequestResource>,
) -> Result<Json<RoomResource>, (StatusCode, Json<RoomsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let command = UpdateRoomCommand::new(UpdateRoomCommandParts {
        room_id,
        name: request.name,
        capacity: request.capacity,
        equipment: request.equipment,
        location: request.location,
        available: request.available,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_update_room(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_room_resource(&record)))
}

#[utoipa::path(
    delete,
    path = "/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i64, Path, description = "Room to delete")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 403, description = "Admin or facility manager role required", body = RoomsErrorResponseResource),
        (status = 404, description = "Room not found", body = RoomsErrorResponseResource)
    )
)]
pub async fn delete_room(
    State(state): State<RoomsRestControllerState>,
    Path(room_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<RoomsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    state
        .command_service
        .handle_delete_room(&caller, room_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_room_resource(record: &RoomRecord) -> RoomResource {
    RoomResource {
        id: record.id,
        name: record.name.clone(),
        capacity: record.capacity,
        equipment: record.equipment.clone(),
        location: record.location.clone(),
        available: record.available,
    }
}

fn map_caller_error(error: CallerIdentityError) -> (StatusCode, Json<RoomsErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(RoomsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: RoomsDomainError) -> (StatusCode, Json<RoomsErrorResponseResource>) {
    let status = match error {
        RoomsDomainError::InvalidRoomName
        | RoomsDomainError::InvalidCapacity
        | RoomsDomainError::DuplicateRoom => StatusCode::BAD_REQUEST,
        RoomsDomainError::RoomNotFound => StatusCode::NOT_FOUND,
        RoomsDomainError::AccessDenied(_) => StatusCode::FORBIDDEN,
        RoomsDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(RoomsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
