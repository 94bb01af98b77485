use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReviewResource {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub status: String,
    pub is_flagged: bool,
    pub created_at: String,
}
