use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UsersDomainError>;

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UsersDomainError>;
}
