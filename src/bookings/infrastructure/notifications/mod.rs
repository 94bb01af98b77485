pub mod booking_notifier;
pub mod logging_booking_notifier_impl;
