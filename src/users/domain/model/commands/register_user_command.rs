use crate::users::domain::model::{
    enums::users_domain_error::UsersDomainError,
    value_objects::{email_address::EmailAddress, username::Username},
};

#[derive(Clone, Debug)]
pub struct RegisterUserCommand {
    username: Username,
    email: EmailAddress,
    password: String,
}

pub struct RegisterUserCommandParts {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(parts: RegisterUserCommandParts) -> Result<Self, UsersDomainError> {
        if parts.password.is_empty() {
            return Err(UsersDomainError::InvalidPassword);
        }
        Ok(Self {
            username: Username::new(parts.username)?,
            email: EmailAddress::new(parts.email)?,
            password: parts.password,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
