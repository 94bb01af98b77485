use crate::access_policy::domain::model::enums::role::Role;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallerIdentity {
    pub role_name: String,
    pub user_id: Option<i64>,
}

impl CallerIdentity {
    pub fn new(role_name: impl Into<String>, user_id: Option<i64>) -> Self {
        Self {
            role_name: role_name.into(),
            user_id,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role_name.parse().ok()
    }
}
