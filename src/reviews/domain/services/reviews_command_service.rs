use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    reviews::{
        domain::model::{
            commands::{
                delete_review_command::DeleteReviewCommand,
                flag_review_command::FlagReviewCommand,
                submit_review_command::SubmitReviewCommand,
                update_review_command::UpdateReviewCommand,
            },
            enums::reviews_domain_error::ReviewsDomainError,
        },
        infrastructure::persistence::repositories::review_repository::ReviewRecord,
    },
};

#[async_trait]
pub trait ReviewsCommandService: Send + Sync {
    async fn handle_submit_review(
        &self,
        caller: &CallerIdentity,
        command: SubmitReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn handle_update_review(
        &self,
        caller: &CallerIdentity,
        command: UpdateReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn handle_delete_review(
        &self,
        caller: &CallerIdentity,
        command: DeleteReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError>;

    async fn handle_flag_review(
        &self,
        caller: &CallerIdentity,
        command: FlagReviewCommand,
    ) -> Result<ReviewRecord, ReviewsDomainError>;
}
