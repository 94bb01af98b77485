#[derive(Clone, Debug)]
pub struct FlagReviewCommand {
    pub review_id: i64,
}
