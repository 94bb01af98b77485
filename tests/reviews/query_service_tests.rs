use meeting_rooms_api::reviews::domain::{
    model::{enums::review_status::ReviewStatus, queries::room_reviews_query::RoomReviewsQuery},
    services::reviews_query_service::ReviewsQueryService,
};

use crate::support::{caller, create_query_harness, review_record};

#[tokio::test]
async fn room_reviews_exclude_soft_deleted_entries() {
    let harness = create_query_harness();
    harness
        .repository
        .seed_review(review_record(1, 10, 4, ReviewStatus::Active));
    harness
        .repository
        .seed_review(review_record(2, 20, 4, ReviewStatus::Deleted));
    harness
        .repository
        .seed_review(review_record(3, 30, 5, ReviewStatus::Active));

    let reviews = harness
        .service
        .handle_room_reviews(&caller("regular_user", 10), RoomReviewsQuery { room_id: 4 })
        .await
        .expect("listing should succeed");

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, 1);
}

#[tokio::test]
async fn room_reviews_are_ordered_most_recent_first() {
    let harness = create_query_harness();
    harness
        .repository
        .seed_review(review_record(1, 10, 4, ReviewStatus::Active));
    harness
        .repository
        .seed_review(review_record(2, 20, 4, ReviewStatus::Active));

    let reviews = harness
        .service
        .handle_room_reviews(&caller("auditor", 99), RoomReviewsQuery { room_id: 4 })
        .await
        .expect("listing should succeed");

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, 1);
    assert_eq!(reviews[1].id, 2);
}

#[tokio::test]
async fn read_only_roles_can_list_room_reviews() {
    let harness = create_query_harness();
    harness
        .repository
        .seed_review(review_record(1, 10, 4, ReviewStatus::Active));

    for role in ["auditor", "service_account"] {
        let reviews = harness
            .service
            .handle_room_reviews(&caller(role, 99), RoomReviewsQuery { room_id: 4 })
            .await
            .expect("read-only roles should list reviews");
        assert_eq!(reviews.len(), 1);
    }
}
