use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::users::{
    domain::model::enums::users_domain_error::UsersDomainError,
    infrastructure::security::password_hasher::PasswordHasher,
};

pub struct Argon2PasswordHasherImpl;

impl Argon2PasswordHasherImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasherImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasherImpl {
    fn hash(&self, password: &str) -> Result<String, UsersDomainError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UsersDomainError> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| UsersDomainError::InfrastructureError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
