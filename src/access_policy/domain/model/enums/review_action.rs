use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReviewAction {
    Create,
    Update,
    Delete,
    ListRoomReviews,
    Flag,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::ListRoomReviews => "list_room_reviews",
            Self::Flag => "flag",
        }
    }

    pub fn all() -> [ReviewAction; 5] {
        [
            Self::Create,
            Self::Update,
            Self::Delete,
            Self::ListRoomReviews,
            Self::Flag,
        ]
    }
}

impl FromStr for ReviewAction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "list_room_reviews" => Ok(Self::ListRoomReviews),
            "flag" => Ok(Self::Flag),
            _ => Err(()),
        }
    }
}
