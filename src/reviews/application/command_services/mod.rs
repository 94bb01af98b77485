pub mod reviews_command_service_impl;
