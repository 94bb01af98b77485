use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::{
    domain::model::enums::users_domain_error::UsersDomainError,
    infrastructure::persistence::repositories::user_account_repository::{
        NewUserAccountRecord, UserAccountRecord, UserAccountRepository, UserProfileUpdate,
    },
};

type UserAccountRow = (i64, String, String, String, String);

pub struct SqlxUserAccountRepositoryImpl {
    pool: PgPool,
}

impl SqlxUserAccountRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), UsersDomainError> {
        let statement = r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'regular_user'
            )
        "#;

        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    fn map_row(row: UserAccountRow) -> UserAccountRecord {
        let (id, username, email, password_hash, role_name) = row;
        UserAccountRecord {
            id,
            username,
            email,
            password_hash,
            role_name,
        }
    }
}

#[async_trait]
impl UserAccountRepository for SqlxUserAccountRepositoryImpl {
    async fn insert_user(
        &self,
        new_user: NewUserAccountRecord,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let statement = r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, role
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(new_user.username)
            .bind(new_user.email)
            .bind(new_user.password_hash)
            .bind(new_user.role_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                    UsersDomainError::DuplicateUser
                }
                other => UsersDomainError::InfrastructureError(other.to_string()),
            })?;

        Ok(Self::map_row(row))
    }

    async fn find_by_id(
        &self,
        user_id: i64,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let statement = r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let statement = r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE username = $1
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let statement = r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE username = $1 OR email = $2
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(row.map(Self::map_row))
    }

    async fn list_users(&self) -> Result<Vec<UserAccountRecord>, UsersDomainError> {
        let statement = r#"
            SELECT id, username, email, password_hash, role
            FROM users
            ORDER BY id
        "#;

        let rows = sqlx::query_as::<_, UserAccountRow>(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: UserProfileUpdate,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let statement = r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
            WHERE id = $1
            RETURNING id, username, email, password_hash, role
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(user_id)
            .bind(update.username)
            .bind(update.email)
            .bind(update.password_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                    UsersDomainError::DuplicateUser
                }
                other => UsersDomainError::InfrastructureError(other.to_string()),
            })?
            .ok_or(UsersDomainError::UserNotFound)?;

        Ok(Self::map_row(row))
    }

    async fn update_role(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let statement = r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            RETURNING id, username, email, password_hash, role
        "#;

        let row = sqlx::query_as::<_, UserAccountRow>(statement)
            .bind(user_id)
            .bind(role_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?
            .ok_or(UsersDomainError::UserNotFound)?;

        Ok(Self::map_row(row))
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), UsersDomainError> {
        let statement = "DELETE FROM users WHERE id = $1";

        let result = sqlx::query(statement)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UsersDomainError::UserNotFound);
        }

        Ok(())
    }
}
