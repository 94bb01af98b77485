use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::bookings::domain::model::enums::{
    booking_status::BookingStatus, bookings_domain_error::BookingsDomainError,
};

#[derive(Clone, Debug)]
pub struct BookingRecord {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewBookingRecord {
    pub user_id: i64,
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct BookingSlotUpdate {
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(
        &self,
        new_booking: NewBookingRecord,
    ) -> Result<BookingRecord, BookingsDomainError>;

    async fn find_booking(
        &self,
        booking_id: i64,
    ) -> Result<Option<BookingRecord>, BookingsDomainError>;

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingsDomainError>;

    async fn find_confirmed_for_room(
        &self,
        room_id: i64,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError>;

    async fn find_bookings_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError>;

    async fn update_booking_slot(
        &self,
        booking_id: i64,
        update: BookingSlotUpdate,
    ) -> Result<BookingRecord, BookingsDomainError>;

    async fn transition_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<BookingRecord, BookingsDomainError>;
}
