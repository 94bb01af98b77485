use crate::rooms::domain::model::enums::rooms_domain_error::RoomsDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: String) -> Result<Self, RoomsDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            return Err(RoomsDomainError::InvalidRoomName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
