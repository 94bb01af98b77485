use axum::Router;
use dotenvy::dotenv;
use meeting_rooms_api::{
    bookings::{
        build_bookings_router,
        interfaces::rest::resources::{
            availability_resource::{AvailabilityQueryResource, AvailabilityResponseResource},
            booking_resource::BookingResource,
            bookings_error_response_resource::BookingsErrorResponseResource,
            create_booking_request_resource::CreateBookingRequestResource,
            update_booking_request_resource::UpdateBookingRequestResource,
        },
    },
    config::app_config::AppConfig,
    reviews::{
        build_reviews_router,
        interfaces::rest::resources::{
            review_resource::ReviewResource,
            reviews_error_response_resource::ReviewsErrorResponseResource,
            submit_review_request_resource::SubmitReviewRequestResource,
            update_review_request_resource::UpdateReviewRequestResource,
        },
    },
    rooms::{
        build_rooms_router,
        interfaces::rest::resources::{
            create_room_request_resource::CreateRoomRequestResource, room_resource::RoomResource,
            rooms_error_response_resource::RoomsErrorResponseResource,
            update_room_request_resource::UpdateRoomRequestResource,
        },
    },
    shared::interfaces::rest::openapi::security::BearerSecurityAddon,
    users::{
        build_users_router,
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
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::register_user,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::login,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::get_my_profile,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::delete_own_account,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::update_profile,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::admin_create_user,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::get_all_users,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::get_user_by_username,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::admin_update_user,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::admin_delete_user,
        meeting_rooms_api::users::interfaces::rest::controllers::users_rest_controller::admin_update_role,
        meeting_rooms_api::rooms::interfaces::rest::controllers::rooms_rest_controller::get_all_rooms,
        meeting_rooms_api::rooms::interfaces::rest::controllers::rooms_rest_controller::get_room,
        meeting_rooms_api::rooms::interfaces::rest::controllers::rooms_rest_controller::create_room,
        meeting_rooms_api::rooms::interfaces::rest::controllers::rooms_rest_controller::update_room,
        meeting_rooms_api::rooms::interfaces::rest::controllers::rooms_rest_controller::delete_room,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::get_all_bookings,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::create_booking,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::update_booking,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::cancel_booking,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::check_availability,
        meeting_rooms_api::bookings::interfaces::rest::controllers::bookings_rest_controller::get_user_booking_history,
        meeting_rooms_api::reviews::interfaces::rest::controllers::reviews_rest_controller::submit_review,
        meeting_rooms_api::reviews::interfaces::rest::controllers::reviews_rest_controller::update_review,
        meeting_rooms_api::reviews::interfaces::rest::controllers::reviews_rest_controller::delete_review,
        meeting_rooms_api::reviews::interfaces::rest::controllers::reviews_rest_controller::get_reviews_for_room,
        meeting_rooms_api::reviews::interfaces::rest::controllers::reviews_rest_controller::flag_review
    ),
    components(
        schemas(
            RegisterUserRequestResource,
            LoginRequestResource,
            LoginResponseResource,
            AdminCreateUserRequestResource,
            UpdateUserRequestResource,
            ChangeRoleRequestResource,
            UserResource,
            UsersErrorResponseResource,
            CreateRoomRequestResource,
            UpdateRoomRequestResource,
            RoomResource,
            RoomsErrorResponseResource,
            CreateBookingRequestResource,
            UpdateBookingRequestResource,
            BookingResource,
            AvailabilityQueryResource,
            AvailabilityResponseResource,
            BookingsErrorResponseResource,
            SubmitReviewRequestResource,
            UpdateReviewRequestResource,
            ReviewResource,
            ReviewsErrorResponseResource
        )
    ),
    tags(
        (name = "users", description = "User registration, authentication and administration"),
        (name = "rooms", description = "Meeting room inventory management"),
        (name = "bookings", description = "Room reservations with interval conflict detection"),
        (name = "reviews", description = "Room reviews and moderation")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let users_router = build_users_router(&config)
        .await
        .expect("failed to build users router");
    let rooms_router = build_rooms_router(&config)
        .await
        .expect("failed to build rooms router");
    let bookings_router = build_bookings_router(&config)
        .await
        .expect("failed to build bookings router");
    let reviews_router = build_reviews_router(&config)
        .await
        .expect("failed to build reviews router");

    let app = Router::new()
        .merge(users_router)
        .merge(rooms_router)
        .merge(bookings_router)
        .merge(reviews_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
