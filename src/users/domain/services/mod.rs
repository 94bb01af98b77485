pub mod users_command_service;
pub mod users_query_service;
