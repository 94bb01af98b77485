use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserResource {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}
