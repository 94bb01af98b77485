use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ChangeRoleRequestResource {
    #[validate(length(min = 1))]
    pub role: String,
}
