pub mod rooms_query_service_impl;
