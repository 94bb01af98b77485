use async_trait::async_trait;
use tracing::info;

use crate::bookings::{
    domain::model::enums::bookings_domain_error::BookingsDomainError,
    infrastructure::{
        notifications::booking_notifier::BookingNotifier,
        persistence::repositories::booking_repository::BookingRecord,
    },
};

pub struct LoggingBookingNotifierImpl;

impl LoggingBookingNotifierImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingBookingNotifierImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingNotifier for LoggingBookingNotifierImpl {
    async fn notify_booking_confirmed(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), BookingsDomainError> {
        info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            room_id = booking.room_id,
            start_time = %booking.start_time,
            "booking confirmed"
        );
        Ok(())
    }

    async fn notify_booking_cancelled(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), BookingsDomainError> {
        info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            room_id = booking.room_id,
            "booking cancelled"
        );
        Ok(())
    }
}
