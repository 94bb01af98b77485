#[derive(Clone, Debug)]
pub struct DeleteReviewCommand {
    pub review_id: i64,
}
