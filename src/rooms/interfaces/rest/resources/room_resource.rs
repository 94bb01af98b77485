use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoomResource {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub equipment: String,
    pub location: String,
    pub available: bool,
}
