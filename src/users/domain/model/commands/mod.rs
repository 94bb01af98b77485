pub mod admin_create_user_command;
pub mod change_user_role_command;
pub mod register_user_command;
pub mod update_user_profile_command;
