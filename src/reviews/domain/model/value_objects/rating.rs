use crate::reviews::domain::model::enums::reviews_domain_error::ReviewsDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, ReviewsDomainError> {
        if !(1..=5).contains(&value) {
            return Err(ReviewsDomainError::InvalidRating);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
