use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequestResource {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
