use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateRoomRequestResource {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub equipment: Option<String>,
    pub location: Option<String>,
    pub available: Option<bool>,
}
