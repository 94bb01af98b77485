use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_policy::domain::{
        model::{
            enums::review_action::ReviewAction,
            value_objects::{
                authorization_context::AuthorizationContext, caller_identity::CallerIdentity,
            },
        },
        services::access_decision_service::AccessDecisionService,
    },
    reviews::{
        domain::{
            model::{
                enums::reviews_domain_error::ReviewsDomainError,
                queries::room_reviews_query::RoomReviewsQuery,
            },
            services::reviews_query_service::ReviewsQueryService,
        },
        infrastructure::persistence::repositories::review_repository::{
            ReviewRecord, ReviewRepository,
        },
    },
};

pub struct ReviewsQueryServiceImpl {
    review_repository: Arc<dyn ReviewRepository>,
}

impl ReviewsQueryServiceImpl {
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }
}

#[async_trait]
impl ReviewsQueryService for ReviewsQueryServiceImpl {
    async fn handle_room_reviews(
        &self,
        caller: &CallerIdentity,
        query: RoomReviewsQuery,
    ) -> Result<Vec<ReviewRecord>, ReviewsDomainError> {
        let context = AuthorizationContext::for_caller(caller.user_id);
        let decision = AccessDecisionService::decide_review_action_for(
            caller,
            ReviewAction::ListRoomReviews,
            &context,
        );

        if !decision.allowed {
            return Err(ReviewsDomainError::AccessDenied(decision.reason));
        }

        self.review_repository
            .find_active_for_room(query.room_id)
            .await
    }
}
