use crate::access_policy::domain::{
    model::{
        enums::{
            access_rule::{AccessRule, OwnershipSelector},
            booking_action::BookingAction,
            review_action::ReviewAction,
            role::Role,
        },
        value_objects::{
            authorization_context::AuthorizationContext, caller_identity::CallerIdentity,
        },
    },
    services::{
        booking_access_policy::BookingAccessPolicy, review_access_policy::ReviewAccessPolicy,
    },
};

#[derive(Clone, Debug)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: String,
}

impl AccessDecision {
    pub fn allowed(reason: &str) -> Self {
        Self {
            allowed: true,
            reason: reason.to_string(),
        }
    }

    pub fn denied(reason: &str) -> Self {
        Self {
            allowed: false,
            reason: reason.to_string(),
        }
    }
}

pub struct AccessDecisionService;

impl AccessDecisionService {
    pub fn decide_booking_action(
        role: Role,
        action: BookingAction,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        Self::evaluate(role, BookingAccessPolicy::rule(role, action), context)
    }

    pub fn decide_review_action(
        role: Role,
        action: ReviewAction,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        Self::evaluate(role, ReviewAccessPolicy::rule(role, action), context)
    }

    pub fn decide_booking_action_by_name(
        role_name: &str,
        action_name: &str,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        let Ok(role) = role_name.parse::<Role>() else {
            return AccessDecision::denied("unknown role");
        };
        let Ok(action) = action_name.parse::<BookingAction>() else {
            return AccessDecision::denied("unknown action");
        };
        Self::decide_booking_action(role, action, context)
    }

    pub fn decide_review_action_by_name(
        role_name: &str,
        action_name: &str,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        let Ok(role) = role_name.parse::<Role>() else {
            return AccessDecision::denied("unknown role");
        };
        let Ok(action) = action_name.parse::<ReviewAction>() else {
            return AccessDecision::denied("unknown action");
        };
        Self::decide_review_action(role, action, context)
    }

    pub fn decide_booking_action_for(
        caller: &CallerIdentity,
        action: BookingAction,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        match caller.role() {
            Some(role) => Self::decide_booking_action(role, action, context),
            None => AccessDecision::denied("unknown role"),
        }
    }

    pub fn decide_review_action_for(
        caller: &CallerIdentity,
        action: ReviewAction,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        match caller.role() {
            Some(role) => Self::decide_review_action(role, action, context),
            None => AccessDecision::denied("unknown role"),
        }
    }

    fn evaluate(role: Role, rule: AccessRule, context: &AuthorizationContext) -> AccessDecision {
        if role == Role::Admin {
            return AccessDecision::allowed("admin override");
        }

        match rule {
            AccessRule::Allow => AccessDecision::allowed("role permits action"),
            AccessRule::AllowIfCallerMatches(selector) => {
                Self::evaluate_ownership(selector, context)
            }
            AccessRule::Deny => AccessDecision::denied("no rule permits this action"),
        }
    }

    fn evaluate_ownership(
        selector: OwnershipSelector,
        context: &AuthorizationContext,
    ) -> AccessDecision {
        let required_match = match selector {
            OwnershipSelector::DeclaredOwner => context.declared_owner_id,
            OwnershipSelector::ResourceOwner => context.resource_owner_id,
            OwnershipSelector::TargetUser => context.target_user_id,
        };

        match (context.caller_id, required_match) {
            (Some(caller_id), Some(owner_id)) if caller_id == owner_id => {
                AccessDecision::allowed("caller matches record owner")
            }
            _ => match selector {
                OwnershipSelector::DeclaredOwner => {
                    AccessDecision::denied("cannot act on behalf of another user")
                }
                OwnershipSelector::ResourceOwner => {
                    AccessDecision::denied("caller does not own this record")
                }
                OwnershipSelector::TargetUser => {
                    AccessDecision::denied("history restricted to own account")
                }
            },
        }
    }
}
