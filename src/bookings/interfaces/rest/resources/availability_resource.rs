use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityQueryResource {
    pub room_id: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityResponseResource {
    pub room_id: i64,
    pub available: bool,
}
