use meeting_rooms_api::bookings::domain::{
    model::{
        commands::update_booking_command::UpdateBookingCommand,
        enums::{booking_status::BookingStatus, bookings_domain_error::BookingsDomainError},
    },
    services::bookings_command_service::BookingsCommandService,
};

use crate::support::fixtures::ROOM_A;
use crate::support::{
    MFA_CODE, booking_record, caller, cancel_command, create_command, create_command_harness, ts,
};

#[tokio::test]
async fn regular_user_creates_booking_for_self() {
    let harness = create_command_harness();

    let record = harness
        .service
        .handle_create_booking(
            &caller("regular_user", 10),
            create_command(10, ROOM_A, ts(12, 0), ts(13, 0)),
        )
        .await
        .expect("booking should be created");

    assert_eq!(record.user_id, 10);
    assert_eq!(record.status, BookingStatus::Confirmed);
    assert_eq!(harness.repository.insert_calls(), 1);
    assert_eq!(harness.notifier.confirmed_booking_ids(), vec![record.id]);
}

#[tokio::test]
async fn regular_user_cannot_create_booking_for_someone_else() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_create_booking(
            &caller("regular_user", 10),
            create_command(20, ROOM_A, ts(12, 0), ts(13, 0)),
        )
        .await;

    match result {
        Err(BookingsDomainError::AccessDenied(reason)) => {
            assert_eq!(reason, "cannot act on behalf of another user");
        }
        other => panic!("expected access denied, got {other:?}"),
    }
    assert_eq!(harness.repository.insert_calls(), 0);
}

#[tokio::test]
async fn facility_manager_creates_booking_for_another_user() {
    let harness = create_command_harness();

    let record = harness
        .service
        .handle_create_booking(
            &caller("facility_manager", 50),
            create_command(20, ROOM_A, ts(12, 0), ts(13, 0)),
        )
        .await
        .expect("facility manager may book for others");

    assert_eq!(record.user_id, 20);
}

#[tokio::test]
async fn overlapping_confirmed_booking_is_rejected_as_conflict() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        1,
        20,
        ROOM_A,
        ts(10, 0),
        ts(11, 0),
        BookingStatus::Confirmed,
    ));

    let result = harness
        .service
        .handle_create_booking(
            &caller("regular_user", 10),
            create_command(10, ROOM_A, ts(10, 30), ts(11, 30)),
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::RoomUnavailable)));
    assert_eq!(harness.repository.insert_calls(), 0);
    assert!(harness.notifier.confirmed_booking_ids().is_empty());
}

#[tokio::test]
async fn back_to_back_booking_is_accepted() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        1,
        20,
        ROOM_A,
        ts(10, 0),
        ts(11, 0),
        BookingStatus::Confirmed,
    ));

    let record = harness
        .service
        .handle_create_booking(
            &caller("regular_user", 10),
            create_command(10, ROOM_A, ts(11, 0), ts(12, 0)),
        )
        .await
        .expect("adjacent slot should not conflict");

    assert_eq!(record.room_id, ROOM_A);
}

#[tokio::test]
async fn cancelled_booking_does_not_block_the_slot() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        1,
        20,
        ROOM_A,
        ts(9, 0),
        ts(10, 0),
        BookingStatus::Cancelled,
    ));

    let result = harness
        .service
        .handle_create_booking(
            &caller("regular_user", 10),
            create_command(10, ROOM_A, ts(9, 0), ts(10, 0)),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn owner_updates_booking_without_self_conflict() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        10,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));

    let record = harness
        .service
        .handle_update_booking(
            &caller("regular_user", 10),
            UpdateBookingCommand {
                booking_id: 7,
                room_id: None,
                start_time: Some(ts(14, 30)),
                end_time: Some(ts(15, 30)),
            },
        )
        .await
        .expect("moving a booking must not conflict with itself");

    assert_eq!(record.start_time, ts(14, 30));
    assert_eq!(harness.repository.update_calls(), 1);
}

#[tokio::test]
async fn update_conflicting_with_other_booking_is_rejected() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        10,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));
    harness.repository.seed_booking(booking_record(
        8,
        20,
        ROOM_A,
        ts(15, 0),
        ts(16, 0),
        BookingStatus::Confirmed,
    ));

    let result = harness
        .service
        .handle_update_booking(
            &caller("regular_user", 10),
            UpdateBookingCommand {
                booking_id: 7,
                room_id: None,
                start_time: Some(ts(14, 30)),
                end_time: Some(ts(15, 30)),
            },
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::RoomUnavailable)));
}

#[tokio::test]
async fn update_by_non_owner_is_denied_but_admin_is_allowed() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        20,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));

    let command = UpdateBookingCommand {
        booking_id: 7,
        room_id: None,
        start_time: Some(ts(16, 0)),
        end_time: Some(ts(17, 0)),
    };

    let denied = harness
        .service
        .handle_update_booking(&caller("regular_user", 10), command.clone())
        .await;
    assert!(matches!(denied, Err(BookingsDomainError::AccessDenied(_))));

    let allowed = harness
        .service
        .handle_update_booking(&caller("admin", 1), command)
        .await;
    assert!(allowed.is_ok());
}

#[tokio::test]
async fn update_with_inverted_interval_is_rejected() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        10,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));

    let result = harness
        .service
        .handle_update_booking(
            &caller("regular_user", 10),
            UpdateBookingCommand {
                booking_id: 7,
                room_id: None,
                start_time: Some(ts(16, 0)),
                end_time: None,
            },
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::InvalidTimeSlot)));
}

#[tokio::test]
async fn update_missing_booking_returns_not_found() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_update_booking(
            &caller("admin", 1),
            UpdateBookingCommand {
                booking_id: 99,
                room_id: None,
                start_time: None,
                end_time: None,
            },
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::BookingNotFound)));
}

#[tokio::test]
async fn cancel_requires_a_valid_mfa_code() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        10,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));

    let missing = harness
        .service
        .handle_cancel_booking(&caller("regular_user", 10), cancel_command(7, None))
        .await;
    assert!(matches!(missing, Err(BookingsDomainError::MfaRequired)));

    let wrong = harness
        .service
        .handle_cancel_booking(&caller("regular_user", 10), cancel_command(7, Some("000000")))
        .await;
    assert!(matches!(wrong, Err(BookingsDomainError::MfaRequired)));

    let record = harness
        .service
        .handle_cancel_booking(&caller("regular_user", 10), cancel_command(7, Some(MFA_CODE)))
        .await
        .expect("cancel with valid mfa code");

    assert_eq!(record.status, BookingStatus::Cancelled);
    assert_eq!(harness.notifier.cancelled_booking_ids(), vec![7]);
}

#[tokio::test]
async fn cancel_by_non_owner_is_denied_before_mfa() {
    let harness = create_command_harness();
    harness.repository.seed_booking(booking_record(
        7,
        20,
        ROOM_A,
        ts(14, 0),
        ts(15, 0),
        BookingStatus::Confirmed,
    ));

    let result = harness
        .service
        .handle_cancel_booking(&caller("regular_user", 10), cancel_command(7, Some(MFA_CODE)))
        .await;

    assert!(matches!(result, Err(BookingsDomainError::AccessDenied(_))));
    let bookings = harness.repository.bookings();
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn auditor_cannot_create_bookings() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_create_booking(
            &caller("auditor", 99),
            create_command(99, ROOM_A, ts(12, 0), ts(13, 0)),
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::AccessDenied(_))));
}
