pub mod admin_create_user_request_resource;
pub mod change_role_request_resource;
pub mod login_resource;
pub mod register_user_request_resource;
pub mod update_user_request_resource;
pub mod user_resource;
pub mod users_error_response_resource;
