pub mod users_query_service_impl;
