use crate::access_policy::domain::model::enums::{
    access_rule::{AccessRule, OwnershipSelector},
    review_action::ReviewAction,
    role::Role,
};

pub struct ReviewAccessPolicy;

impl ReviewAccessPolicy {
    pub fn rule(role: Role, action: ReviewAction) -> AccessRule {
        match action {
            ReviewAction::Create => match role {
                Role::RegularUser | Role::FacilityManager => {
                    AccessRule::AllowIfCallerMatches(OwnershipSelector::DeclaredOwner)
                }
                _ => AccessRule::Deny,
            },
            ReviewAction::Update | ReviewAction::Delete => match role {
                Role::Moderator => AccessRule::Allow,
                Role::RegularUser | Role::FacilityManager => {
                    AccessRule::AllowIfCallerMatches(OwnershipSelector::ResourceOwner)
                }
                _ => AccessRule::Deny,
            },
            ReviewAction::ListRoomReviews => AccessRule::Allow,
            ReviewAction::Flag => match role {
                Role::Moderator => AccessRule::Allow,
                _ => AccessRule::Deny,
            },
        }
    }
}
