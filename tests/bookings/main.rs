mod command_service_tests;
mod query_service_tests;
mod support;
