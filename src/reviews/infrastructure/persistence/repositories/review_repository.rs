use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::reviews::domain::model::enums::{
    review_status::ReviewStatus, reviews_domain_error::ReviewsDomainError,
};

#[derive(Clone, Debug)]
pub struct ReviewRecord {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub status: ReviewStatus,
    pub is_flagged: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewReviewRecord {
    pub user_id: i64,
    pub room_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ReviewContentUpdate {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert_review(
        &self,
        new_review: NewReviewRecord,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn find_review(
        &self,
        review_id: i64,
    ) -> Result<Option<ReviewRecord>, ReviewsDomainError>;

    async fn find_active_for_room(
        &self,
        room_id: i64,
    ) -> Result<Vec<ReviewRecord>, ReviewsDomainError>;

    async fn update_content(
        &self,
        review_id: i64,
        update: ReviewContentUpdate,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn transition_status(
        &self,
        review_id: i64,
        status: ReviewStatus,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn mark_flagged(&self, review_id: i64) -> Result<ReviewRecord, ReviewsDomainError>;
}
