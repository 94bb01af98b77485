pub mod sqlx_booking_repository_impl;
