use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateRoomRequestResource {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub equipment: String,
    pub location: String,
}
