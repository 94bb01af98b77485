use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingsDomainError {
    #[error("end_time must be after start_time")]
    InvalidTimeSlot,

    #[error("booking not found")]
    BookingNotFound,

    #[error("room is not available in this time slot")]
    RoomUnavailable,

    #[error("forbidden: {0}")]
    AccessDenied(String),

    #[error("mfa required or invalid code")]
    MfaRequired,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
