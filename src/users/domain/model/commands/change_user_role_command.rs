use crate::{
    access_policy::domain::model::enums::role::Role,
    users::domain::model::enums::users_domain_error::UsersDomainError,
};

#[derive(Clone, Debug)]
pub struct ChangeUserRoleCommand {
    user_id: i64,
    role: Role,
}

impl ChangeUserRoleCommand {
    pub fn new(user_id: i64, role_name: String) -> Result<Self, UsersDomainError> {
        Ok(Self {
            user_id,
            role: role_name
                .parse()
                .map_err(|_| UsersDomainError::InvalidRoleName)?,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
