use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::bookings::{
    domain::model::enums::{
        booking_status::BookingStatus, bookings_domain_error::BookingsDomainError,
    },
    infrastructure::persistence::repositories::booking_repository::{
        BookingRecord, BookingRepository, BookingSlotUpdate, NewBookingRecord,
    },
};

type BookingRow = (
    i64,
    i64,
    i64,
    DateTime<Utc>,
    DateTime<Utc>,
    String,
    DateTime<Utc>,
);

pub struct SqlxBookingRepositoryImpl {
    pool: PgPool,
}

impl SqlxBookingRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), BookingsDomainError> {
        let statement = r#"
            CREATE TABLE IF NOT EXISTS bookings (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL,
                room_id BIGINT NOT NULL,
                start_time TIMESTAMPTZ NOT NULL,
                end_time TIMESTAMPTZ NOT NULL,
                status TEXT NOT NULL DEFAULT 'CONFIRMED',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        let index_statement = r#"
            CREATE INDEX IF NOT EXISTS idx_bookings_room_status
            ON bookings (room_id, status)
        "#;

        sqlx::query(index_statement)
            .execute(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    fn map_row(row: BookingRow) -> Result<BookingRecord, BookingsDomainError> {
        let (id, user_id, room_id, start_time, end_time, status, created_at) = row;

        Ok(BookingRecord {
            id,
            user_id,
            room_id,
            start_time,
            end_time,
            status: status.parse().map_err(|_| {
                BookingsDomainError::InfrastructureError("invalid booking status stored".to_string())
            })?,
            created_at,
        })
    }

    fn map_rows(rows: Vec<BookingRow>) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        rows.into_iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl BookingRepository for SqlxBookingRepositoryImpl {
    async fn insert_booking(
        &self,
        new_booking: NewBookingRecord,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(new_booking.room_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        let overlap_statement = r#"
            SELECT EXISTS(
                SELECT 1
                FROM bookings
                WHERE room_id = $1
                  AND status = 'CONFIRMED'
                  AND start_time < $3
                  AND end_time > $2
            )
        "#;

        let overlapping = sqlx::query_scalar::<_, bool>(overlap_statement)
            .bind(new_booking.room_id)
            .bind(new_booking.start_time)
            .bind(new_booking.end_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        if overlapping {
            return Err(BookingsDomainError::RoomUnavailable);
        }

        let insert_statement = r#"
            INSERT INTO bookings (user_id, room_id, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, 'CONFIRMED')
            RETURNING id, user_id, room_id, start_time, end_time, status, created_at
        "#;

        let row = sqlx::query_as::<_, BookingRow>(insert_statement)
            .bind(new_booking.user_id)
            .bind(new_booking.room_id)
            .bind(new_booking.start_time)
            .bind(new_booking.end_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_row(row)
    }

    async fn find_booking(
        &self,
        booking_id: i64,
    ) -> Result<Option<BookingRecord>, BookingsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, start_time, end_time, status, created_at
            FROM bookings
            WHERE id = $1
        "#;

        let row = sqlx::query_as::<_, BookingRow>(statement)
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        row.map(Self::map_row).transpose()
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, start_time, end_time, status, created_at
            FROM bookings
            ORDER BY start_time
        "#;

        let rows = sqlx::query_as::<_, BookingRow>(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_rows(rows)
    }

    async fn find_confirmed_for_room(
        &self,
        room_id: i64,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, start_time, end_time, status, created_at
            FROM bookings
            WHERE room_id = $1 AND status = 'CONFIRMED'
        "#;

        let rows = sqlx::query_as::<_, BookingRow>(statement)
            .bind(room_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_rows(rows)
    }

    async fn find_bookings_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<BookingRecord>, BookingsDomainError> {
        let statement = r#"
            SELECT id, user_id, room_id, start_time, end_time, status, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY start_time DESC
        "#;

        let rows = sqlx::query_as::<_, BookingRow>(statement)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_rows(rows)
    }

    async fn update_booking_slot(
        &self,
        booking_id: i64,
        update: BookingSlotUpdate,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(update.room_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        let overlap_statement = r#"
            SELECT EXISTS(
                SELECT 1
                FROM bookings
                WHERE room_id = $1
                  AND status = 'CONFIRMED'
                  AND id <> $2
                  AND start_time < $4
                  AND end_time > $3
            )
        "#;

        let overlapping = sqlx::query_scalar::<_, bool>(overlap_statement)
            .bind(update.room_id)
            .bind(booking_id)
            .bind(update.start_time)
            .bind(update.end_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        if overlapping {
            return Err(BookingsDomainError::RoomUnavailable);
        }

        let update_statement = r#"
            UPDATE bookings
            SET room_id = $2, start_time = $3, end_time = $4
            WHERE id = $1
            RETURNING id, user_id, room_id, start_time, end_time, status, created_at
        "#;

        let row = sqlx::query_as::<_, BookingRow>(update_statement)
            .bind(booking_id)
            .bind(update.room_id)
            .bind(update.start_time)
            .bind(update.end_time)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?
            .ok_or(BookingsDomainError::BookingNotFound)?;

        tx.commit()
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?;

        Self::map_row(row)
    }

    async fn transition_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<BookingRecord, BookingsDomainError> {
        let statement = r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, room_id, start_time, end_time, status, created_at
        "#;

        let row = sqlx::query_as::<_, BookingRow>(statement)
            .bind(booking_id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingsDomainError::InfrastructureError(e.to_string()))?
            .ok_or(BookingsDomainError::BookingNotFound)?;

        Self::map_row(row)
    }
}
