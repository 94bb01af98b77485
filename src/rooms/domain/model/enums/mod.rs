pub mod rooms_domain_error;
