use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    bookings::{
        domain::model::{
            commands::{
                cancel_booking_command::CancelBookingCommand,
                create_booking_command::CreateBookingCommand,
                update_booking_command::UpdateBookingCommand,
            },
            enums::bookings_domain_error::BookingsDomainError,
        },
        infrastructure::persistence::repositories::booking_repository::BookingRecord,
    },
};

#[async_trait]
pub trait BookingsCommandService: Send + Sync {
    async fn handle_create_booking(
        &self,
        caller: &CallerIdentity,
        command: CreateBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError>;

    async fn handle_update_booking(
        &self,
        caller: &CallerIdentity,
        command: UpdateBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError>;

    async fn handle_cancel_booking(
        &self,
        caller: &CallerIdentity,
        command: CancelBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError>;
}
