pub mod access_rule;
pub mod booking_action;
pub mod review_action;
pub mod role;
