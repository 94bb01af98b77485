pub mod postgres;
pub mod room_repository;
