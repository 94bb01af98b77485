pub mod create_room_request_resource;
pub mod room_resource;
pub mod rooms_error_response_resource;
pub mod update_room_request_resource;
