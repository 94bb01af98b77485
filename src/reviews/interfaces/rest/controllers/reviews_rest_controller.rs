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
    reviews::{
        domain::{
            model::{
                commands::{
                    delete_review_command::DeleteReviewCommand,
                    flag_review_command::FlagReviewCommand,
                    submit_review_command::{SubmitReviewCommand, SubmitReviewCommandParts},
                    update_review_command::{UpdateReviewCommand, UpdateReviewCommandParts},
                },
                enums::reviews_domain_error::ReviewsDomainError,
                queries::room_reviews_query::RoomReviewsQuery,
            },
            services::{
                reviews_command_service::ReviewsCommandService,
                reviews_query_service::ReviewsQueryService,
            },
        },
        infrastructure::persistence::repositories::review_repository::ReviewRecord,
        interfaces::rest::resources::{
            review_resource::ReviewResource,
            reviews_error_response_resource::ReviewsErrorResponseResource,
            submit_review_request_resource::SubmitReviewRequestResource,
            update_review_request_resource::UpdateReviewRequestResource,
        },
    },
    shared::interfaces::rest::caller_identity_extractor::{
        CallerIdentityError, extract_caller_identity,
    },
};

#[derive(Clone)]
pub struct ReviewsRestControllerState {
    pub command_service: Arc<dyn ReviewsCommandService>,
    pub query_service: Arc<dyn ReviewsQueryService>,
    pub authentication_facade: Arc<dyn AuthenticationFacade>,
}

pub fn router(state: ReviewsRestControllerState) -> Router {
    Router::new()
        .route("/reviews", post(submit_review))
        .route("/reviews/:review_id", put(update_review))
        .route("/reviews/:review_id", delete(delete_review))
        .route("/reviews/room/:room_id", get(get_reviews_for_room))
        .route("/reviews/:review_id/flag", post(flag_review))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    request_body = SubmitReviewRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Review created", body = ReviewResource),
        (status = 400, description = "Missing or invalid fields", body = ReviewsErrorResponseResource),
        (status = 403, description = "Caller may not create this review", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn submit_review(
    State(state): State<ReviewsRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<SubmitReviewRequestResource>,
) -> Result<(StatusCode, Json<ReviewResource>), (StatusCode, Json<ReviewsErrorResponseResource>)>
{
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ReviewsErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = SubmitReviewCommand::new(SubmitReviewCommandParts {
        user_id: request.user_id,
        room_id: request.room_id,
        rating: request.rating,
        comment: request.comment,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_submit_review(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_review_resource(&record))))
}

#[utoipa::path(
    put,
    path = "/reviews/{review_id}",
    tag = "reviews",
    params(
        ("review_id" = i64, Path, description = "Review to update")
    ),
    request_body = UpdateReviewRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Review updated", body = ReviewResource),
        (status = 400, description = "Invalid rating", body = ReviewsErrorResponseResource),
        (status = 403, description = "Caller may not update this review", body = ReviewsErrorResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn update_review(
    State(state): State<ReviewsRestControllerState>,
    Path(review_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<UpdateReviewRequestResource>,
) -> Result<Json<ReviewResource>, (StatusCode, Json<ReviewsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let command = UpdateReviewCommand::new(UpdateReviewCommandParts {
        review_id,
        rating: request.rating,
        comment: request.comment,
    })
    .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_update_review(&caller, command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_review_resource(&record)))
}

#[utoipa::path(
    delete,
    path = "/reviews/{review_id}",
    tag = "reviews",
    params(
        ("review_id" = i64, Path, description = "Review to delete")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Review soft deleted", body = ReviewResource),
        (status = 403, description = "Caller may not delete this review", body = ReviewsErrorResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn delete_review(
    State(state): State<ReviewsRestControllerState>,
    Path(review_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<ReviewResource>, (StatusCode, Json<ReviewsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let record = state
        .command_service
        .handle_delete_review(&caller, DeleteReviewCommand { review_id })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_review_resource(&record)))
}

#[utoipa::path(
    get,
    path = "/reviews/room/{room_id}",
    tag = "reviews",
    params(
        ("room_id" = i64, Path, description = "Room whose reviews are requested")
    ),
    responses(
        (status = 200, description = "Active reviews for the room", body = [ReviewResource]),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn get_reviews_for_room(
    State(state): State<ReviewsRestControllerState>,
    Path(room_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReviewResource>>, (StatusCode, Json<ReviewsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let reviews = state
        .query_service
        .handle_room_reviews(&caller, RoomReviewsQuery { room_id })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(reviews.iter().map(to_review_resource).collect()))
}

#[utoipa::path(
    post,
    path = "/reviews/{review_id}/flag",
    tag = "reviews",
    params(
        ("review_id" = i64, Path, description = "Review to flag as inappropriate")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Review flagged", body = ReviewResource),
        (status = 403, description = "Only moderators or admins may flag", body = ReviewsErrorResponseResource),
        (status = 404, description = "Review not found", body = ReviewsErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = ReviewsErrorResponseResource)
    )
)]
pub async fn flag_review(
    State(state): State<ReviewsRestControllerState>,
    Path(review_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<ReviewResource>, (StatusCode, Json<ReviewsErrorResponseResource>)> {
    let caller = extract_caller_identity(&state.authentication_facade, &headers)
        .await
        .map_err(map_caller_error)?;

    let record = state
        .command_service
        .handle_flag_review(&caller, FlagReviewCommand { review_id })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_review_resource(&record)))
}

fn to_review_resource(record: &ReviewRecord) -> ReviewResource {
    ReviewResource {
        id: record.id,
        user_id: record.user_id,
        room_id: record.room_id,
        rating: record.rating,
        comment: record.comment.clone(),
        status: record.status.as_str().to_string(),
        is_flagged: record.is_flagged,
        created_at: record.created_at.to_rfc3339(),
    }
}

fn map_caller_error(
    error: CallerIdentityError,
) -> (StatusCode, Json<ReviewsErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ReviewsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: ReviewsDomainError) -> (StatusCode, Json<ReviewsErrorResponseResource>) {
    let status = match error {
        ReviewsDomainError::InvalidRating => StatusCode::BAD_REQUEST,
        ReviewsDomainError::ReviewNotFound => StatusCode::NOT_FOUND,
        ReviewsDomainError::AccessDenied(_) => StatusCode::FORBIDDEN,
        ReviewsDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ReviewsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
