pub mod access_decision_service;
pub mod booking_access_policy;
pub mod review_access_policy;
