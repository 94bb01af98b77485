use crate::reviews::domain::model::{
    enums::reviews_domain_error::ReviewsDomainError, value_objects::rating::Rating,
};

#[derive(Clone, Debug)]
pub struct UpdateReviewCommand {
    review_id: i64,
    rating: Option<Rating>,
    comment: Option<String>,
}

pub struct UpdateReviewCommandParts {
    pub review_id: i64,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateReviewCommand {
    pub fn new(parts: UpdateReviewCommandParts) -> Result<Self, ReviewsDomainError> {
        Ok(Self {
            review_id: parts.review_id,
            rating: parts.rating.map(Rating::new).transpose()?,
            comment: parts.comment,
        })
    }

    pub fn review_id(&self) -> i64 {
        self.review_id
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
