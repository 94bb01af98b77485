use crate::users::domain::model::{
    enums::users_domain_error::UsersDomainError,
    value_objects::{email_address::EmailAddress, username::Username},
};

#[derive(Clone, Debug)]
pub struct UpdateUserProfileCommand {
    user_id: i64,
    username: Option<Username>,
    email: Option<EmailAddress>,
    password: Option<String>,
}

pub struct UpdateUserProfileCommandParts {
    pub user_id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserProfileCommand {
    pub fn new(parts: UpdateUserProfileCommandParts) -> Result<Self, UsersDomainError> {
        if parts.password.as_deref() == Some("") {
            return Err(UsersDomainError::InvalidPassword);
        }
        Ok(Self {
            user_id: parts.user_id,
            username: parts.username.map(Username::new).transpose()?,
            email: parts.email.map(EmailAddress::new).transpose()?,
            password: parts.password,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
