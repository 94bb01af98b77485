use async_trait::async_trait;
use sqlx::PgPool;

use crate::rooms::{
    domain::model::enums::rooms_domain_error::RoomsDomainError,
    infrastructure::persistence::repositories::room_repository::{
        NewRoomRecord, RoomRecord, RoomRepository, RoomUpdate,
    },
};

type RoomRow = (i64, String, i32, String, String, bool);

pub struct SqlxRoomRepositoryImpl {
    pool: PgPool,
}

impl SqlxRoomRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), RoomsDomainError> {
        let statement = r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                capacity INTEGER NOT NULL,
                equipment TEXT NOT NULL,
                location TEXT NOT NULL,
                available BOOLEAN NOT NULL DEFAULT TRUE
            )
        "#;

        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| RoomsDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    fn map_row(row: RoomRow) -> RoomRecord {
        let (id, name, capacity, equipment, location, available) = row;
        RoomRecord {
            id,
            name,
            capacity,
            equipment,
            location,
            available,
        }
    }
}

#[async_trait]
impl RoomRepository for SqlxRoomRepositoryImpl {
    async fn insert_room(&self, new_room: NewRoomRecord) -> Result<RoomRecord, RoomsDomainError> {
        let statement = r#"
            INSERT INTO rooms (name, capacity, equipment, location, available)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING id, name, capacity, equipment, location, available
        "#;

        let row = sqlx::query_as::<_, RoomRow>(statement)
            .bind(new_room.name)
            .bind(new_room.capacity)
            .bind(new_room.equipment)
            .bind(new_room.location)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                    RoomsDomainError::DuplicateRoom
                }
                other => RoomsDomainError::InfrastructureError(other.to_string()),
            })?;

        Ok(Self::map_row(row))
    }

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomRecord>, RoomsDomainError> {
        let statement = r#"
            SELECT id, name, capacity, equipment, location, available
            FROM rooms
            WHERE id = $1
        "#;

        let row = sqlx::query_as::<_, RoomRow>(statement)
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoomsDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RoomRecord>, RoomsDomainError> {
        let statement = r#"
            SELECT id, name, capacity, equipment, location, available
            FROM rooms
            WHERE name = $1
        "#;

        let row = sqlx::query_as::<_, RoomRow>(statement)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoomsDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsDomainError> {
        let statement = r#"
            SELECT id, name, capacity, equipment, location, available
            FROM rooms
            ORDER BY id
        "#;

        let rows = sqlx::query_as::<_, RoomRow>(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RoomsDomainError::InfrastructureError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    async fn update_room(
        &self,
        room_id: i64,
        update: RoomUpdate,
    ) -> Result<RoomRecord, RoomsDomainError> {
        let statement = r#"
            UPDATE rooms
            SET name = COALESCE($2, name),
                capacity = COALESCE($3, capacity),
                equipment = COALESCE($4, equipment),
                location = COALESCE($5, location),
                available = COALESCE($6, available)
            WHERE id = $1
            RETURNING id, name, capacity, equipment, location, available
        "#;

        let row = sqlx::query_as::<_, RoomRow>(statement)
            .bind(room_id)
            .bind(update.name)
            .bind(update.capacity)
            .bind(update.equipment)
            .bind(update.location)
            .bind(update.available)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                    RoomsDomainError::DuplicateRoom
                }
                other => RoomsDomainError::InfrastructureError(other.to_string()),
            })?
            .ok_or(RoomsDomainError::RoomNotFound)?;

        Ok(Self::map_row(row))
    }

    async fn delete_room(&self, room_id: i64) -> Result<(), RoomsDomainError> {
        let statement = "DELETE FROM rooms WHERE id = $1";

        let result = sqlx::query(statement)
            .bind(room_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RoomsDomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RoomsDomainError::RoomNotFound);
        }

        Ok(())
    }
}
