pub mod reviews_query_service_impl;
