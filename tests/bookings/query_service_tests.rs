use meeting_rooms_api::bookings::domain::{
    model::{
        enums::{booking_status::BookingStatus, bookings_domain_error::BookingsDomainError},
        queries::{
            check_availability_query::{CheckAvailabilityQuery, CheckAvailabilityQueryParts},
            user_booking_history_query::UserBookingHistoryQuery,
        },
    },
    services::bookings_query_service::BookingsQueryService,
};

use crate::support::fixtures::ROOM_A;
use crate::support::{booking_record, caller, create_query_harness, ts};

fn availability_query(room_id: i64, start_hour: u32, end_hour: u32) -> CheckAvailabilityQuery {
    CheckAvailabilityQuery::new(CheckAvailabilityQueryParts {
        room_id,
        start_time: ts(start_hour, 0),
        end_time: ts(end_hour, 0),
    })
    .expect("valid availability query")
}

#[tokio::test]
async fn admin_and_auditor_list_all_bookings() {
    let harness = create_query_harness();
    harness.repository.seed_booking(booking_record(
        1,
        10,
        ROOM_A,
        ts(10, 0),
        ts(11, 0),
        BookingStatus::Confirmed,
    ));

    for role in ["admin", "auditor"] {
        let bookings = harness
            .service
            .handle_list_bookings(&caller(role, 1))
            .await
            .expect("listing should succeed");
        assert_eq!(bookings.len(), 1);
    }
}

#[tokio::test]
async fn regular_user_cannot_list_all_bookings() {
    let harness = create_query_harness();

    let result = harness
        .service
        .handle_list_bookings(&caller("regular_user", 10))
        .await;

    assert!(matches!(result, Err(BookingsDomainError::AccessDenied(_))));
}

#[tokio::test]
async fn availability_reflects_confirmed_overlaps() {
    let harness = create_query_harness();
    harness.repository.seed_booking(booking_record(
        1,
        10,
        ROOM_A,
        ts(10, 0),
        ts(11, 0),
        BookingStatus::Confirmed,
    ));

    let busy = harness
        .service
        .handle_check_availability(&caller("regular_user", 10), availability_query(ROOM_A, 10, 11))
        .await
        .expect("availability check should succeed");
    assert!(!busy.available);

    let free = harness
        .service
        .handle_check_availability(&caller("regular_user", 10), availability_query(ROOM_A, 11, 12))
        .await
        .expect("availability check should succeed");
    assert!(free.available);
    assert_eq!(free.room_id, ROOM_A);
}

#[tokio::test]
async fn availability_ignores_cancelled_bookings() {
    let harness = create_query_harness();
    harness.repository.seed_booking(booking_record(
        1,
        10,
        ROOM_A,
        ts(9, 0),
        ts(10, 0),
        BookingStatus::Cancelled,
    ));

    let result = harness
        .service
        .handle_check_availability(&caller("auditor", 99), availability_query(ROOM_A, 9, 10))
        .await
        .expect("availability check should succeed");

    assert!(result.available);
}

#[tokio::test]
async fn user_history_is_ordered_most_recent_first() {
    let harness = create_query_harness();
    harness.repository.seed_booking(booking_record(
        1,
        10,
        ROOM_A,
        ts(9, 0),
        ts(10, 0),
        BookingStatus::Confirmed,
    ));
    harness.repository.seed_booking(booking_record(
        2,
        10,
        ROOM_A,
        ts(15, 0),
        ts(16, 0),
        BookingStatus::Cancelled,
    ));

    let history = harness
        .service
        .handle_user_booking_history(
            &caller("regular_user", 10),
            UserBookingHistoryQuery { user_id: 10 },
        )
        .await
        .expect("own history should be readable");

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, 2);
    assert_eq!(history[1].id, 1);
}

#[tokio::test]
async fn regular_user_cannot_read_other_users_history() {
    let harness = create_query_harness();

    let result = harness
        .service
        .handle_user_booking_history(
            &caller("regular_user", 10),
            UserBookingHistoryQuery { user_id: 20 },
        )
        .await;

    assert!(matches!(result, Err(BookingsDomainError::AccessDenied(_))));
}

#[tokio::test]
async fn facility_manager_reads_any_users_history() {
    let harness = create_query_harness();
    harness.repository.seed_booking(booking_record(
        1,
        20,
        ROOM_A,
        ts(9, 0),
        ts(10, 0),
        BookingStatus::Confirmed,
    ));

    let history = harness
        .service
        .handle_user_booking_history(
            &caller("facility_manager", 50),
            UserBookingHistoryQuery { user_id: 20 },
        )
        .await
        .expect("facility manager reads any history");

    assert_eq!(history.len(), 1);
}
