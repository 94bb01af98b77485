use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    bookings::{
        domain::model::{
            enums::bookings_domain_error::BookingsDomainError,
            queries::{
                check_availability_query::CheckAvailabilityQuery,
                user_booking_history_query::UserBookingHistoryQuery,
            },
        },
        infrastructure::persistence::repositories::booking_repository::BookingRecord,
    },
};

#[derive(Clone, Debug)]
pub struct RoomAvailabilityResult {
    pub room_id: i64,
    pub available: bool,
}

#[async_trait]
pub trait BookingsQueryService: Send + Sync {
    async fn handle_list_bookings(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError>;

    async fn handle_check_availability(
        &self,
        caller: &CallerIdentity,
        query: CheckAvailabilityQuery,
    ) -> Result<RoomAvailabilityResult, BookingsDomainError>;

    async fn handle_user_booking_history(
        &self,
        caller: &CallerIdentity,
        query: UserBookingHistoryQuery,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError>;
}
