pub mod bookings_query_service_impl;
