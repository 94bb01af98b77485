use crate::{
    access_policy::domain::model::enums::role::Role,
    users::domain::model::{
        enums::users_domain_error::UsersDomainError,
        value_objects::{email_address::EmailAddress, username::Username},
    },
};

#[derive(Clone, Debug)]
pub struct AdminCreateUserCommand {
    username: Username,
    email: EmailAddress,
    password: String,
    role: Role,
}

pub struct AdminCreateUserCommandParts {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_name: String,
}

impl AdminCreateUserCommand {
    pub fn new(parts: AdminCreateUserCommandParts) -> Result<Self, UsersDomainError> {
        if parts.password.is_empty() {
            return Err(UsersDomainError::InvalidPassword);
        }
        Ok(Self {
            username: Username::new(parts.username)?,
            email: EmailAddress::new(parts.email)?,
            password: parts.password,
            role: parts
                .role_name
                .parse()
                .map_err(|_| UsersDomainError::InvalidRoleName)?,
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

    pub fn role(&self) -> Role {
        self.role
    }
}
