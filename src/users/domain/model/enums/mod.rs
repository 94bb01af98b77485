pub mod users_domain_error;
