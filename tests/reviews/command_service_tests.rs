use meeting_rooms_api::reviews::domain::{
    model::{
        commands::{
            delete_review_command::DeleteReviewCommand, flag_review_command::FlagReviewCommand,
            submit_review_command::{SubmitReviewCommand, SubmitReviewCommandParts},
        },
        enums::{review_status::ReviewStatus, reviews_domain_error::ReviewsDomainError},
    },
    services::reviews_command_service::ReviewsCommandService,
};

use crate::support::{
    caller, create_command_harness, review_record, submit_command, update_command,
};

#[tokio::test]
async fn user_creates_review_for_self() {
    let harness = create_command_harness();

    let record = harness
        .service
        .handle_submit_review(&caller("regular_user", 10), submit_command(10, 1, 4))
        .await
        .expect("review should be created");

    assert_eq!(record.user_id, 10);
    assert_eq!(record.rating, 4);
    assert_eq!(record.status, ReviewStatus::Active);
    assert!(!record.is_flagged);
    assert_eq!(harness.repository.insert_calls(), 1);
}

#[tokio::test]
async fn user_cannot_create_review_for_someone_else() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_submit_review(&caller("regular_user", 10), submit_command(20, 1, 5))
        .await;

    match result {
        Err(ReviewsDomainError::AccessDenied(reason)) => {
            assert_eq!(reason, "cannot act on behalf of another user");
        }
        other => panic!("expected access denied, got {other:?}"),
    }
    assert_eq!(harness.repository.insert_calls(), 0);
}

#[test]
fn rating_outside_range_is_rejected_at_construction() {
    for rating in [0, 6, -1] {
        let result = SubmitReviewCommand::new(SubmitReviewCommandParts {
            user_id: 10,
            room_id: 1,
            rating,
            comment: None,
        });
        assert!(matches!(result, Err(ReviewsDomainError::InvalidRating)));
    }
}

#[tokio::test]
async fn owner_updates_own_review_but_other_users_cannot() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_review(review_record(5, 10, 2, ReviewStatus::Active));

    let updated = harness
        .service
        .handle_update_review(&caller("regular_user", 10), update_command(5, Some(4), None))
        .await
        .expect("owner update should succeed");
    assert_eq!(updated.rating, 4);

    let denied = harness
        .service
        .handle_update_review(&caller("regular_user", 99), update_command(5, Some(1), None))
        .await;
    assert!(matches!(denied, Err(ReviewsDomainError::AccessDenied(_))));
}

#[tokio::test]
async fn moderator_updates_and_deletes_any_review() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_review(review_record(5, 10, 2, ReviewStatus::Active));

    let updated = harness
        .service
        .handle_update_review(
            &caller("moderator", 50),
            update_command(5, None, Some("Edited by moderator")),
        )
        .await
        .expect("moderator update should succeed");
    assert_eq!(updated.comment.as_deref(), Some("Edited by moderator"));

    let deleted = harness
        .service
        .handle_delete_review(&caller("moderator", 50), DeleteReviewCommand { review_id: 5 })
        .await
        .expect("moderator delete should succeed");
    assert_eq!(deleted.status, ReviewStatus::Deleted);
}

#[tokio::test]
async fn deleted_review_is_not_found_for_further_updates() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_review(review_record(5, 10, 2, ReviewStatus::Deleted));

    let result = harness
        .service
        .handle_update_review(&caller("admin", 1), update_command(5, Some(2), None))
        .await;

    assert!(matches!(result, Err(ReviewsDomainError::ReviewNotFound)));
}

#[tokio::test]
async fn auditor_cannot_delete_reviews() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_review(review_record(5, 10, 2, ReviewStatus::Active));

    let result = harness
        .service
        .handle_delete_review(&caller("auditor", 99), DeleteReviewCommand { review_id: 5 })
        .await;

    assert!(matches!(result, Err(ReviewsDomainError::AccessDenied(_))));
}

#[tokio::test]
async fn moderator_flags_review_but_regular_user_cannot() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_review(review_record(5, 10, 3, ReviewStatus::Active));

    let denied = harness
        .service
        .handle_flag_review(&caller("regular_user", 10), FlagReviewCommand { review_id: 5 })
        .await;
    assert!(matches!(denied, Err(ReviewsDomainError::AccessDenied(_))));

    let flagged = harness
        .service
        .handle_flag_review(&caller("moderator", 50), FlagReviewCommand { review_id: 5 })
        .await
        .expect("moderator flag should succeed");
    assert!(flagged.is_flagged);
}

#[tokio::test]
async fn facility_manager_creates_review_only_for_self() {
    let harness = create_command_harness();

    let own = harness
        .service
        .handle_submit_review(&caller("facility_manager", 50), submit_command(50, 1, 5))
        .await;
    assert!(own.is_ok());

    let other = harness
        .service
        .handle_submit_review(&caller("facility_manager", 50), submit_command(20, 1, 5))
        .await;
    assert!(matches!(other, Err(ReviewsDomainError::AccessDenied(_))));
}
