use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingAction {
    GetAll,
    Create,
    Update,
    Cancel,
    UserHistory,
    CheckAvailability,
}

impl BookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Cancel => "cancel",
            Self::UserHistory => "user_history",
            Self::CheckAvailability => "check_availability",
        }
    }

    pub fn all() -> [BookingAction; 6] {
        [
            Self::GetAll,
            Self::Create,
            Self::Update,
            Self::Cancel,
            Self::UserHistory,
            Self::CheckAvailability,
        ]
    }
}

impl FromStr for BookingAction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "get_all" => Ok(Self::GetAll),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "cancel" => Ok(Self::Cancel),
            "user_history" => Ok(Self::UserHistory),
            "check_availability" => Ok(Self::CheckAvailability),
            _ => Err(()),
        }
    }
}
