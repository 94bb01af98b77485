use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoomsDomainError {
    #[error("room name is invalid")]
    InvalidRoomName,

    #[error("capacity must be positive")]
    InvalidCapacity,

    #[error("room already exists")]
    DuplicateRoom,

    #[error("room not found")]
    RoomNotFound,

    #[error("forbidden: {0}")]
    AccessDenied(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
