use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingResource {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub created_at: String,
}
