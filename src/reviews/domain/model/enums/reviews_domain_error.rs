use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewsDomainError {
    #[error("rating must be between 1 and 5")]
    InvalidRating,

    #[error("review not found")]
    ReviewNotFound,

    #[error("forbidden: {0}")]
    AccessDenied(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
