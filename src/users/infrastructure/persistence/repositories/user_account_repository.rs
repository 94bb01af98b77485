use async_trait::async_trait;

use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

#[derive(Clone, Debug)]
pub struct UserAccountRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_name: String,
}

#[derive(Clone, Debug)]
pub struct NewUserAccountRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role_name: String,
}

#[derive(Clone, Debug)]
pub struct UserProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    async fn insert_user(
        &self,
        new_user: NewUserAccountRecord,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn find_by_id(
        &self,
        user_id: i64,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError>;

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError>;

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError>;

    async fn list_users(&self) -> Result<Vec<UserAccountRecord>, UsersDomainError>;

    async fn update_profile(
        &self,
        user_id: i64,
        update: UserProfileUpdate,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn update_role(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn delete_user(&self, user_id: i64) -> Result<(), UsersDomainError>;
}
