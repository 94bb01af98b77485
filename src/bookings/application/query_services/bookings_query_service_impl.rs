use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

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
                enums::bookings_domain_error::BookingsDomainError,
                queries::{
                    check_availability_query::CheckAvailabilityQuery,
                    user_booking_history_query::UserBookingHistoryQuery,
                },
            },
            services::{
                booking_conflict_checker::BookingConflictChecker,
                bookings_query_service::{BookingsQueryService, RoomAvailabilityResult},
            },
        },
        infrastructure::persistence::repositories::booking_repository::{
            BookingRecord, BookingRepository,
        },
    },
};

pub struct BookingsQueryServiceImpl {
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingsQueryServiceImpl {
    pub fn new(booking_repository: Arc<dyn BookingRepository>) -> Self {
        Self { booking_repository }
    }
}

#[async_trait]
impl BookingsQueryService for BookingsQueryServiceImpl {
    async fn handle_list_bookings(
        &self,
        caller: &CallerIdentity,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        let context = AuthorizationContext::for_caller(caller.user_id);
        let decision =
            AccessDecisionService::decide_booking_action_for(caller, BookingAction::GetAll, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "booking listing denied");
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        self.booking_repository.list_bookings().await
    }

    async fn handle_check_availability(
        &self,
        caller: &CallerIdentity,
        query: CheckAvailabilityQuery,
    ) -> Result<RoomAvailabilityResult, BookingsDomainError> {
        let context = AuthorizationContext::for_caller(caller.user_id);
        let decision = AccessDecisionService::decide_booking_action_for(
            caller,
            BookingAction::CheckAvailability,
            &context,
        );

        if !decision.allowed {
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        let existing = self
            .booking_repository
            .find_confirmed_for_room(query.room_id())
            .await?;

        let available =
            !BookingConflictChecker::has_conflict(query.room_id(), query.slot(), &existing, None);

        Ok(RoomAvailabilityResult {
            room_id: query.room_id(),
            available,
        })
    }

    async fn handle_user_booking_history(
        &self,
        caller: &CallerIdentity,
        query: UserBookingHistoryQuery,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        let context =
            AuthorizationContext::for_caller(caller.user_id).with_target_user(query.user_id);
        let decision = AccessDecisionService::decide_booking_action_for(
            caller,
            BookingAction::UserHistory,
            &context,
        );

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "booking history denied");
            return Err(BookingsDomainError::AccessDenied(decision.reason));
        }

        self.booking_repository
            .find_bookings_for_user(query.user_id)
            .await
    }
}
