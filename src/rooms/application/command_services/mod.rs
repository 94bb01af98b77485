pub mod rooms_command_service_impl;
