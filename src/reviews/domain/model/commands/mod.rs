pub mod delete_review_command;
pub mod flag_review_command;
pub mod submit_review_command;
pub mod update_review_command;
