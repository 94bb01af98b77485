pub mod authorization_context;
pub mod caller_identity;
