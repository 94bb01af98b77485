use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    access_policy::domain::{
        model::{
            enums::booking_action::BookingAction,
            value_objects::{
                authorization_context::AuthorizationContext, caller_identity::CallerIdentity,
            },
        },
        services::access_decision_service::AccessDecisionService,
    },
    bookings::{
        domain::{
            model::{
                commands::{
                    cancel_booking_command::CancelBookingCommand,
                    create_booking_command::CreateBookingCommand,
                    update_booking_command::UpdateBookingCommand,
                },
                enums::{
                    booking_status::BookingStatus, bookings_domain_error::BookingsDomainError,
                },
                value_objects::time_slot::TimeSlot,
            },
            services::{
                booking_conflict_checker::BookingConflictChecker,
                bookings_command_service::BookingsCommandService,
            },
        },
        infrastructure::{
            notifications::booking_notifier::BookingNotifier,
            persistence::repositories::booking_repository::{
                BookingRecord, BookingRepository, BookingSlotUpdate, NewBookingRecord,
            },
        },
    },
};

pub struct BookingsCommandServiceImpl {
    booking_repository: Arc<dyn BookingRepository>,
    booking_notifier: Arc<dyn BookingNotifier>,
    mfa_cancel_code: String,
}

impl BookingsCommandServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        booking_notifier: Arc<dyn BookingNotifier>,
        mfa_cancel_code: String,
    ) -> Self {
        Self {
            booking_repository,
            booking_notifier,
            mfa_cancel_code,
        }
    }

    fn verify_mfa_for_cancel(&self, provided: Option<&str>) -> Result<(), BookingsDomainError> {
        match provided {
            Some(code) if code == self.mfa_cancel_code => Ok(()),
            _ => Err(BookingsDomainError::MfaRequired),
        }
    }
}

#[async_trait]
impl BookingsCommandService for BookingsCommandServiceImpl {
    async fn handle_create_booking(
        &self,
        caller: &CallerIdentity,
        command: CreateBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let context = AuthorizationContext::for_caller(caller.user_id)
            .with_declared_owner(command.user_id());
        let decision =
            AccessDecisionService::decide_booking_action_for(caller, BookingAction::Create, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "booking create denied");
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        let existing = self
            .booking_repository
            .find_confirmed_for_room(command.room_id())
            .await?;

        if BookingConflictChecker::has_conflict(command.room_id(), command.slot(), &existing, None)
        {
            return Err(BookingsDomainError::RoomUnavailable);
        }

        let record = self
            .booking_repository
            .insert_booking(NewBookingRecord {
                user_id: command.user_id(),
                room_id: command.room_id(),
                start_time: command.slot().start(),
                end_time: command.slot().end(),
            })
            .await?;

        info!(booking_id = record.id, room_id = record.room_id, "booking created");
        let _ = self
            .booking_notifier
            .notify_booking_confirmed(&record)
            .await;

        Ok(record)
    }

    async fn handle_update_booking(
        &self,
        caller: &CallerIdentity,
        command: UpdateBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let booking = self
            .booking_repository
            .find_booking(command.booking_id)
            .await?
            .ok_or(BookingsDomainError::BookingNotFound)?;

        let context = AuthorizationContext::for_caller(caller.user_id)
            .with_resource_owner(booking.user_id);
        let decision =
            AccessDecisionService::decide_booking_action_for(caller, BookingAction::Update, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "booking update denied");
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        let room_id = command.room_id.unwrap_or(booking.room_id);
        let start_time = command.start_time.unwrap_or(booking.start_time);
        let end_time = command.end_time.unwrap_or(booking.end_time);
        let slot = TimeSlot::new(start_time, end_time)?;

        let existing = self
            .booking_repository
            .find_confirmed_for_room(room_id)
            .await?;

        if BookingConflictChecker::has_conflict(room_id, &slot, &existing, Some(booking.id)) {
            return Err(BookingsDomainError::RoomUnavailable);
        }

        let record = self
            .booking_repository
            .update_booking_slot(
                booking.id,
                BookingSlotUpdate {
                    room_id,
                    start_time: slot.start(),
                    end_time: slot.end(),
                },
            )
            .await?;

        info!(booking_id = record.id, room_id = record.room_id, "booking updated");

        Ok(record)
    }

    async fn handle_cancel_booking(
        &self,
        caller: &CallerIdentity,
        command: CancelBookingCommand,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let booking = self
            .booking_repository
            .find_booking(command.booking_id)
            .await?
            .ok_or(BookingsDomainError::BookingNotFound)?;

        let context = AuthorizationContext::for_caller(caller.user_id)
            .with_resource_owner(booking.user_id);
        let decision =
            AccessDecisionService::decide_booking_action_for(caller, BookingAction::Cancel, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "booking cancel denied");
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        self.verify_mfa_for_cancel(command.mfa_code.as_deref())?;

        let record = self
            .booking_repository
            .transition_status(booking.id, BookingStatus::Cancelled)
            .await?;

        info!(booking_id = record.id, "booking cancelled");
        let _ = self
            .booking_notifier
            .notify_booking_cancelled(&record)
            .await;

        Ok(record)
    }
}
