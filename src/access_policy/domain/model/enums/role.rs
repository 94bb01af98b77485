use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Admin,
    RegularUser,
    FacilityManager,
    Moderator,
    Auditor,
    ServiceAccount,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::RegularUser => "regular_user",
            Self::FacilityManager => "facility_manager",
            Self::Moderator => "moderator",
            Self::Auditor => "auditor",
            Self::ServiceAccount => "service_account",
        }
    }

    pub fn all() -> [Role; 6] {
        [
            Self::Admin,
            Self::RegularUser,
            Self::FacilityManager,
            Self::Moderator,
            Self::Auditor,
            Self::ServiceAccount,
        ]
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "regular_user" => Ok(Self::RegularUser),
            "facility_manager" => Ok(Self::FacilityManager),
            "moderator" => Ok(Self::Moderator),
            "auditor" => Ok(Self::Auditor),
            "service_account" => Ok(Self::ServiceAccount),
            _ => Err(()),
        }
    }
}
