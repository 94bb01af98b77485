use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

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
                commands::{
                    delete_review_command::DeleteReviewCommand,
                    flag_review_command::FlagReviewCommand,
                    submit_review_command::SubmitReviewCommand,
                    update_review_command::UpdateReviewCommand,
                },
                enums::{review_status::ReviewStatus, reviews_domain_error::ReviewsDomainError},
            },
            services::reviews_command_service::ReviewsCommandService,
        },
        infrastructure::persistence::repositories::review_repository::{
            NewReviewRecord, ReviewContentUpdate, ReviewRecord, ReviewRepository,
        },
    },
};

pub struct ReviewsCommandServiceImpl {
    review_repository: Arc<dyn ReviewRepository>,
}

impl ReviewsCommandServiceImpl {
    pub fn new(review_repository: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repository }
    }

    async fn find_visible_review(
        &self,
        review_id: i64,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let review = self
            .review_repository
            .find_review(review_id)
            .await?
            .ok_or(ReviewsDomainError::ReviewNotFound)?;

        if review.status == ReviewStatus::Deleted {
            return Err(ReviewsDomainError::ReviewNotFound);
        }

        Ok(review)
    }
}

#[async_trait]
impl ReviewsCommandService for ReviewsCommandServiceImpl {
    async fn handle_submit_review(
        &self,
        caller: &CallerIdentity,
        command: SubmitReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let context = AuthorizationContext::for_caller(caller.user_id)
            .with_declared_owner(command.user_id());
        let decision =
            AccessDecisionService::decide_review_action_for(caller, ReviewAction::Create, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "review create denied");
            return Err(ReviewsDomainError::AccessDenied(decision.reason));
        }

        let record = self
            .review_repository
            .insert_review(NewReviewRecord {
                user_id: command.user_id(),
                room_id: command.room_id(),
                rating: command.rating().value(),
                comment: command.comment().map(str::to_string),
            })
            .await?;

        info!(review_id = record.id, room_id = record.room_id, "review submitted");

        Ok(record)
    }

    async fn handle_update_review(
        &self,
        caller: &CallerIdentity,
        command: UpdateReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let review = self.find_visible_review(command.review_id()).await?;

        let context =
            AuthorizationContext::for_caller(caller.user_id).with_resource_owner(review.user_id);
        let decision =
            AccessDecisionService::decide_review_action_for(caller, ReviewAction::Update, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "review update denied");
            return Err(ReviewsDomainError::AccessDenied(decision.reason));
        }

        self.review_repository
            .update_content(
                review.id,
                ReviewContentUpdate {
                    rating: command.rating().map(|rating| rating.value()),
                    comment: command.comment().map(str::to_string),
                },
            )
            .await
    }

    async fn handle_delete_review(
        &self,
        caller: &CallerIdentity,
        command: DeleteReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let review = self.find_visible_review(command.review_id).await?;

        let context =
            AuthorizationContext::for_caller(caller.user_id).with_resource_owner(review.user_id);
        let decision =
            AccessDecisionService::decide_review_action_for(caller, ReviewAction::Delete, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "review delete denied");
            return Err(ReviewsDomainError::AccessDenied(decision.reason));
        }

        let record = self
            .review_repository
            .transition_status(review.id, ReviewStatus::Deleted)
            .await?;

        info!(review_id = record.id, "review deleted");

        Ok(record)
    }

    async fn handle_flag_review(
        &self,
        caller: &CallerIdentity,
        command: FlagReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError> {
        let review = self.find_visible_review(command.review_id).await?;

        let context =
            AuthorizationContext::for_caller(caller.user_id).with_resource_owner(review.user_id);
        let decision =
            AccessDecisionService::decide_review_action_for(caller, ReviewAction::Flag, &context);

        if !decision.allowed {
            warn!(role = %caller.role_name, reason = %decision.reason, "review flag denied");
            return Err(ReviewsDomainError::AccessDenied(decision.reason));
        }

        let record = self.review_repository.mark_flagged(review.id).await?;

        info!(review_id = record.id, "review flagged");

        Ok(record)
    }
}
