use crate::reviews::domain::model::{
    enums::reviews_domain_error::ReviewsDomainError, value_objects::rating::Rating,
};

#[derive(Clone, Debug)]
pub struct SubmitReviewCommand {
    user_id: i64,
    room_id: i64,
    rating: Rating,
    comment: Option<String>,
}

pub struct SubmitReviewCommandParts {
    pub user_id: i64,
    pub room_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

impl SubmitReviewCommand {
    pub fn new(parts: SubmitReviewCommandParts) -> Result<Self, ReviewsDomainError> {
        Ok(Self {
            user_id: parts.user_id,
            room_id: parts.room_id,
            rating: Rating::new(parts.rating)?,
            comment: parts.comment,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
