pub mod access_policy;
pub mod auth_integration;
pub mod bookings;
pub mod config;
pub mod reviews;
pub mod rooms;
pub mod shared;
pub mod users;
