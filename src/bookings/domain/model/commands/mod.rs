pub mod cancel_booking_command;
pub mod create_booking_command;
pub mod update_booking_command;
