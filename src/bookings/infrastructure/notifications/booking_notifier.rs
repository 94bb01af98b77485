use async_trait::async_trait;

use crate::bookings::{
    domain::model::enums::bookings_domain_error::BookingsDomainError,
    infrastructure::persistence::repositories::booking_repository::BookingRecord,
};

#[async_trait]
pub trait BookingNotifier: Send + Sync {
    async fn notify_booking_confirmed(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), BookingsDomainError>;

    async fn notify_booking_cancelled(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), BookingsDomainError>;
}
