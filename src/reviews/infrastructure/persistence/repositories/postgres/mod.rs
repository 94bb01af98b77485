pub mod sqlx_review_repository_impl;
