use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::reviews::{
    domain::model::enums::{review_status::ReviewStatus, reviews_domain_error::ReviewsDomainError},
    infrastructure::persistence::repositories::review_repository::{
        NewReviewRecord, ReviewContentUpdate, ReviewRecord, ReviewRepository,
    },
};

type ReviewRow = (
    i64,
    i64,
    i64,
    i32,
    Option<String>,
    String,
    bool,
    DateTime<Utc>,
);

pub struct SqlxReviewRepositoryImpl {
    pool: PgPool,
}

impl SqlxReviewRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), ReviewsDomainError> {
        let statement = r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL,
                room_id BIGINT NOT NULL,
                rating INTEGER NOT NULL,
                comment TEXT,
                status TEXT NOT NULL DEFAULT 'ACTIVE',
                is_flagged BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        let index_statement = r#"
            CREATE INDEX IF NOT EXISTS idx_reviews_room_status
            ON reviews (room_id, status)
        "#;

        sqlx::query(index_statement)
            .execute(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    fn map_row(row: ReviewRow) -> Result<ReviewRecord, ReviewsDomainError> {
        let (id, user_id, room_id, rating, comment, status, is_flagged, created_at) = row;

        Ok(ReviewRecord {
            id,
            user_id,
            room_id,
            rating,
            comment,
            status: status.parse().map_err(|_| {
                ReviewsDomainError::InfrastructureError("invalid review status stored".to_string())
            })?,
            is_flagged,
            created_at,
        })
    }

    fn map_rows(rows: Vec<ReviewRow>) -> Result<Vec<ReviewRecord>, ReviewsDomainError> {
        rows.into_iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl ReviewRepository for SqlxReviewRepositoryImpl {
    async fn insert_review(
        &self,
        new_review: NewReviewRecord,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let statement = r#"
            INSERT INTO reviews (user_id, room_id, rating, comment, status, is_flagged)
            VALUES ($1, $2, $3, $4, 'ACTIVE', FALSE)
            RETURNING id, user_id, room_id, rating, comment, status, is_flagged, created_at
        "#;

        let row = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(new_review.user_id)
            .bind(new_review.room_id)
            .bind(new_review.rating)
            .bind(new_review.comment)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_row(row)
    }

    async fn find_review(
        &self,
        review_id: i64,
    ) -> Result<Option<ReviewRecord>, ReviewsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, rating, comment, status, is_flagged, created_at
            FROM reviews
            WHERE id = $1
        "#;

        let row = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        row.map(Self::map_row).transpose()
    }

    async fn find_active_for_room(
        &self,
        room_id: i64,
    ) -> Result<Vec<ReviewRecord>, ReviewsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, rating, comment, status, is_flagged, created_at
            FROM reviews
            WHERE room_id = $1 AND status = 'ACTIVE'
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(room_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_rows(rows)
    }

    async fn update_content(
        &self,
        review_id: i64,
        update: ReviewContentUpdate,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let statement = r#"
            UPDATE reviews
            SET rating = COALESCE($2, rating),
                comment = COALESCE($3, comment)
            WHERE id = $1
            RETURNING id, user_id, room_id, rating, comment, status, is_flagged, created_at
        "#;

        let row = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(review_id)
            .bind(update.rating)
            .bind(update.comment)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?
            .ok_or(ReviewsDomainError::ReviewNotFound)?;

        Self::map_row(row)
    }

    async fn transition_status(
        &self,
        review_id: i64,
        status: ReviewStatus,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let statement = r#"
            UPDATE reviews
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, room_id, rating, comment, status, is_flagged, created_at
        "#;

        let row = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(review_id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?
            .ok_or(ReviewsDomainError::ReviewNotFound)?;

        Self::map_row(row)
    }

    async fn mark_flagged(&self, review_id: i64) -> Result<ReviewRecord, ReviewsDomainError> {
        let statement = r#"
            UPDATE reviews
            SET is_flagged = TRUE
            WHERE id = $1
            RETURNING id, user_id, room_id, rating, comment, status, is_flagged, created_at
        "#;

        let row = sqlx::query_as::<_, ReviewRow>(statement)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ReviewsDomainError::InfrastructureError(e.to_string()))?
            .ok_or(ReviewsDomainError::ReviewNotFound)?;

        Self::map_row(row)
    }
}
