use crate::users::domain::model::enums::users_domain_error::UsersDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, UsersDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 64 {
            return Err(UsersDomainError::InvalidUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
