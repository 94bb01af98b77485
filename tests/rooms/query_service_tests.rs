use meeting_rooms_api::rooms::domain::{
    model::enums::rooms_domain_error::RoomsDomainError,
    services::rooms_query_service::RoomsQueryService,
};

use crate::support::{create_query_harness, room_record};

#[tokio::test]
async fn list_rooms_returns_all_records() {
    let harness = create_query_harness();
    harness
        .repository
        .seed_room(room_record(1, "Conference Room A"));
    harness
        .repository
        .seed_room(room_record(2, "Conference Room B"));

    let rooms = harness
        .service
        .handle_list_rooms()
        .await
        .expect("listing should succeed");

    assert_eq!(rooms.len(), 2);
}

#[tokio::test]
async fn get_room_returns_record_or_not_found() {
    let harness = create_query_harness();
    harness
        .repository
        .seed_room(room_record(1, "Conference Room A"));

    let room = harness
        .service
        .handle_get_room(1)
        .await
        .expect("room should be found");
    assert_eq!(room.name, "Conference Room A");

    let missing = harness.service.handle_get_room(99).await;
    assert!(matches!(missing, Err(RoomsDomainError::RoomNotFound)));
}
