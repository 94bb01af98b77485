use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post, put},
};
use validator::Validate;

use crate::{
    auth_integration::interfaces::acl::authentication_facade::AuthenticationFacade,
    shared::interfaces::rest::caller_identity_extractor::{
        CallerIdentityError, extract_caller_identity,
    },
    users::{
        domain::{
            model::{
                commands::{
                    admin_create_user_command::{
                        AdminCreateUserCommand, AdminCreateUserCommandParts,
                    },
                    change_user_role_command::ChangeUserRoleCommand,
                    register_user_command::{RegisterUserCommand, RegisterUserCommandParts},
                    update_user_profile_command::{
                        UpdateUserProfileCommand, UpdateUserProfileCommandParts,
                    },
                },
                enums::users_domain_error::UsersDomainError,
                queries::login_query::LoginQuery,
            },
            services::{
                users_command_service::UsersCommandService,
                users_query_service::UsersQueryService,
            },
        },
        infrastructure::persistence::repositories::user_account_repository::UserAccountRecord,
        interfaces::rest::resources::{
            admin_create_user_request_resource::AdminCreateUserRequestResource,
            change_role_request_resource::ChangeRoleRequestResource,
            login_resource::{LoginRequestResource, LoginResponseResource},
            register_user_request_resource::RegisterUserRequestResource,
            update_user_request_resource::UpdateUserRequestResource,
            user_resource::UserResource,
            users_error_response_resource::UsersErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct UsersRestControllerState {
    pub command_service: Arc<dyn UsersCommandService>,
    pub query_service: Arc<dyn UsersQueryService>,
    pub authentication_facade: Arc<dyn AuthenticationFacade>,
}

pub fn router(state: UsersRestControllerState) -> Router {
    Router::new()
        .route("/users/register", post(register_user))
        .route("/users/login", post(login))
        .route("/users/me", get(get_my_profile))
        .route("/users/me", delete(delete_own_account))
        .route("/users/update/:user_id", put(update_profile))
        .route("/users/admin/users", post(admin_create_user))
        .route("/users", get(get_all_users))
        .route("/users/username/:username", get(get_user_by_username))
        .route("/users/admin/users/:user_id", put(admin_update_user))
        .route("/users/admin/users/:user_id", delete(admin_delete_user))
        .route("/users/admin/users/:user_id/role", patch(admin_update_role))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/users/register",
    tag = "users",
    request_body = RegisterUserRequestResource,
    responses(
        (status = 201, description = "User registered", body = UserResource),
        (status = 400, description = "Invalid payload or duplicate user", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn register_user(
    State(state): State<UsersRestControllerState>,
    Json(request): Json<RegisterUserRequestResource>,
) -> Result<(StatusCode, Json<UserResource>), (StatusCode, Json<UsersErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = RegisterUserCommand::new(RegisterUserCommandParts {
        username: request.username,
        email: request.email,
        password: request.password,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_register_user(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_user_resource(&record))))
}

#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequestResource,
    responses(
        (status = 200, description = "Access token issued", body = LoginResponseResource),
        (status = 400, description = "Incorrect username or password", body = UsersErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = UsersErrorResponseResource)
    )
)]
pub async fn login(
    State(state): State<UsersRestControllerState>,
    Json(request): Json<LoginRequestResource>,
) -> Result<Json<LoginResponseResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let result = state
        .query_service
        .handle_login(LoginQuery {
            username: request.username,
            password: request.password,
        })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LoginResponseResource {
        access_token: result.access_token,
        token_type: result.token_type,
        role: result.role_name,
        user_id: result.user_id,
    }))
}

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Own profile", body = UserResource),
        (status = 401, description = "Missing or invalid credentials", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn get_my_profile(
    State(state): State<UsersRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<UserResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let record = state
        .query_service
        .handle_get_profile(&caller)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_user_resource(&record)))
}

#[utoipa::path(
    delete,
    path = "/users/me",
    tag = "users",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 204, description = "Own account deleted"),
        (status = 401, description = "Missing or invalid credentials", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn delete_own_account(
    State(state): State<UsersRestControllerState>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    state
        .command_service
        .handle_delete_own_account(&caller)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/users/update/{user_id}",
    tag = "users",
    params(
        ("user_id" = i64, Path, description = "User to update")
    ),
    request_body = UpdateUserRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = UserResource),
        (status = 403, description = "Caller may not update this profile", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn update_profile(
    State(state): State<UsersRestControllerState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequestResource>,
) -> Result<Json<UserResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let command = UpdateUserProfileCommand::new(UpdateUserProfileCommandParts {
        user_id,
        username: request.username,
        email: request.email,
        password: request.password,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_update_user_profile(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_user_resource(&record)))
}

#[utoipa::path(
    post,
    path = "/users/admin/users",
    tag = "users",
    request_body = AdminCreateUserRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "User created with explicit role", body = UserResource),
        (status = 400, description = "Invalid payload or duplicate user", body = UsersErrorResponseResource),
        (status = 403, description = "Admin privileges required", body = UsersErrorResponseResource)
    )
)]
pub async fn admin_create_user(
    State(state): State<UsersRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<AdminCreateUserRequestResource>,
) -> Result<(StatusCode, Json<UserResource>), (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = AdminCreateUserCommand::new(AdminCreateUserCommandParts {
        username: request.username,
        email: request.email,
        password: request.password,
        role_name: request.role,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_admin_create_user(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_user_resource(&record))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "All users", body = [UserResource]),
        (status = 403, description = "Admin or auditor role required", body = UsersErrorResponseResource)
    )
)]
pub async fn get_all_users(
    State(state): State<UsersRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserResource>>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let users = state
        .query_service
        .handle_list_users(&caller)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(users.iter().map(to_user_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/users/username/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "User found", body = UserResource),
        (status = 403, description = "Admin or auditor role required", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn get_user_by_username(
    State(state): State<UsersRestControllerState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Result<Json<UserResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let record = state
        .query_service
        .handle_get_user_by_username(&caller, &username)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_user_resource(&record)))
}

#[utoipa::path(
    put,
    path = "/users/admin/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i64, Path, description = "User to update")
    ),
    request_body = UpdateUserRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "User updated", body = UserResource),
        (status = 403, description = "Admin privileges required", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn admin_update_user(
    State(state): State<UsersRestControllerState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequestResource>,
) -> Result<Json<UserResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let command = UpdateUserProfileCommand::new(UpdateUserProfileCommandParts {
        user_id,
        username: request.username,
        email: request.email,
        password: request.password,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_update_user_profile(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_user_resource(&record)))
}

#[utoipa::path(
    delete,
    path = "/users/admin/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i64, Path, description = "User to delete")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Admin privileges required", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn admin_delete_user(
    State(state): State<UsersRestControllerState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    state
        .command_service
        .handle_delete_user(&caller, user_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/users/admin/users/{user_id}/role",
    tag = "users",
    params(
        ("user_id" = i64, Path, description = "User whose role changes")
    ),
    request_body = ChangeRoleRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Role updated", body = UserResource),
        (status = 400, description = "Unknown role", body = UsersErrorResponseResource),
        (status = 403, description = "Admin privileges required", body = UsersErrorResponseResource),
        (status = 404, description = "User not found", body = UsersErrorResponseResource)
    )
)]
pub async fn admin_update_role(
    State(state): State<UsersRestControllerState>,
    Path(user_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<ChangeRoleRequestResource>,
) -> Result<Json<UserResource>, (StatusCode, Json<UsersErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command =
        ChangeUserRoleCommand::new(user_id, request.role).map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_change_user_role(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_user_resource(&record)))
}

fn to_user_resource(record: &UserAccountRecord) -> UserResource {
    UserResource {
        id: record.id,
        username: record.username.clone(),
        email: record.email.clone(),
        role: record.role_name.clone(),
    }
}

fn bad_request(message: String) -> (StatusCode, Json<UsersErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        Json(UsersErrorResponseResource { message }),
    )
}

fn map_caller_error(error: CallerIdentityError) -> (StatusCode, Json<UsersErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(UsersErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: UsersDomainError) -> (StatusCode, Json<UsersErrorResponseResource>) {
    let status = match error {
        UsersDomainError::InvalidUsername
        | UsersDomainError::InvalidEmail
        | UsersDomainError::InvalidPassword
        | UsersDomainError::InvalidRoleName
        | UsersDomainError::DuplicateUser
        | UsersDomainError::InvalidCredentials => StatusCode::BAD_REQUEST,
        UsersDomainError::UserNotFound => StatusCode::NOT_FOUND,
        UsersDomainError::AccessDenied(_) => StatusCode::FORBIDDEN,
        UsersDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(UsersErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
