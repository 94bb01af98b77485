pub mod sqlx_user_account_repository_impl;
