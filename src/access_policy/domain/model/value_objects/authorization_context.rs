#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuthorizationContext {
    pub caller_id: Option<i64>,
    pub declared_owner_id: Option<i64>,
    pub resource_owner_id: Option<i64>,
    pub target_user_id: Option<i64>,
}

impl AuthorizationContext {
    pub fn for_caller(caller_id: Option<i64>) -> Self {
        Self {
            caller_id,
            ..Self::default()
        }
    }

    pub fn with_declared_owner(mut self, declared_owner_id: i64) -> Self {
        self.declared_owner_id = Some(declared_owner_id);
        self
    }

    pub fn with_resource_owner(mut self, resource_owner_id: i64) -> Self {
        self.resource_owner_id = Some(resource_owner_id);
        self
    }

    pub fn with_target_user(mut self, target_user_id: i64) -> Self {
        self.target_user_id = Some(target_user_id);
        self
    }
}
