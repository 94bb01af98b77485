pub mod login_query;
