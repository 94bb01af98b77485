pub mod availability_resource;
pub mod booking_resource;
pub mod bookings_error_response_resource;
pub mod create_booking_request_resource;
pub mod update_booking_request_resource;
