pub mod booking_conflict_checker;
pub mod bookings_command_service;
pub mod bookings_query_service;
