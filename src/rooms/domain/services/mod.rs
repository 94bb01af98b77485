pub mod rooms_command_service;
pub mod rooms_query_service;
