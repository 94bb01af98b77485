use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateBookingRequestResource {
    pub room_id: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
