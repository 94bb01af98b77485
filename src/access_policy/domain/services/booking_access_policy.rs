use crate::access_policy::domain::model::enums::{
    access_rule::{AccessRule, OwnershipSelector},
    booking_action::BookingAction,
    role::Role,
};

pub struct BookingAccessPolicy;

impl BookingAccessPolicy {
    pub fn rule(role: Role, action: BookingAction) -> AccessRule {
        match action {
            BookingAction::GetAll => match role {
                Role::FacilityManager | Role::Auditor | Role::ServiceAccount => AccessRule::Allow,
                _ => AccessRule::Deny,
            },
            BookingAction::Create => match role {
                Role::FacilityManager => AccessRule::Allow,
                Role::RegularUser | Role::Moderator => {
                    AccessRule::AllowIfCallerMatches(OwnershipSelector::DeclaredOwner)
                }
                _ => AccessRule::Deny,
            },
            BookingAction::Update | BookingAction::Cancel => match role {
                Role::RegularUser | Role::FacilityManager | Role::Moderator => {
                    AccessRule::AllowIfCallerMatches(OwnershipSelector::ResourceOwner)
                }
                _ => AccessRule::Deny,
            },
            BookingAction::UserHistory => match role {
                Role::FacilityManager | Role::Auditor | Role::ServiceAccount => AccessRule::Allow,
                Role::RegularUser | Role::Moderator => {
                    AccessRule::AllowIfCallerMatches(OwnershipSelector::TargetUser)
                }
                _ => AccessRule::Deny,
            },
            BookingAction::CheckAvailability => AccessRule::Allow,
        }
    }
}
