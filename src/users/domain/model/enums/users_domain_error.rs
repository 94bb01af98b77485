use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersDomainError {
    #[error("username is invalid")]
    InvalidUsername,

    #[error("email is invalid")]
    InvalidEmail,

    #[error("password is invalid")]
    InvalidPassword,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("username or email already exists")]
    DuplicateUser,

    #[error("user not found")]
    UserNotFound,

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("forbidden: {0}")]
    AccessDenied(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
