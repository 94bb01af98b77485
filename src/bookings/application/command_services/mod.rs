pub mod bookings_command_service_impl;
