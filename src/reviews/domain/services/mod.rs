pub mod reviews_command_service;
pub mod reviews_query_service;
