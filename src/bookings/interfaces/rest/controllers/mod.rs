pub mod bookings_rest_controller;
