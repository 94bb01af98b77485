use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateReviewRequestResource {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
