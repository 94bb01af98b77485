use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    reviews::{
        domain::model::{
            enums::reviews_domain_error::ReviewsDomainError,
            queries::room_reviews_query::RoomReviewsQuery,
        },
        infrastructure::persistence::repositories::review_repository::ReviewRecord,
    },
};

#[async_trait]
pub trait ReviewsQueryService: Send + Sync {
    async fn handle_room_reviews(
        &self,
        caller: &CallerIdentity,
        query: RoomReviewsQuery,
    ) -> Result<Vec<ReviewRecord>, ReviewsDomainError>;
}
