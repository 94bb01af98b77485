pub mod users_command_service_impl;
