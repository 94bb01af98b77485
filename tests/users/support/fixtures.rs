use meeting_rooms_api::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    users::{
        domain::model::commands::{
            admin_create_user_command::{AdminCreateUserCommand, AdminCreateUserCommandParts},
            register_user_command::{RegisterUserCommand, RegisterUserCommandParts},
        },
        infrastructure::persistence::repositories::user_account_repository::UserAccountRecord,
    },
};

use super::fakes::FakePasswordHasher;

pub fn caller(role_name: &str, user_id: i64) -> CallerIdentity {
    CallerIdentity::new(role_name, Some(user_id))
}

pub fn register_command(username: &str, email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand::new(RegisterUserCommandParts {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
    .expect("valid register command")
}

pub fn admin_create_command(username: &str, role_name: &str) -> AdminCreateUserCommand {
    AdminCreateUserCommand::new(AdminCreateUserCommandParts {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "secret".to_string(),
        role_name: role_name.to_string(),
    })
    .expect("valid admin create command")
}

pub fn user_record(id: i64, username: &str, role_name: &str) -> UserAccountRecord {
    UserAccountRecord {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: FakePasswordHasher::hash_for("secret"),
        role_name: role_name.to_string(),
    }
}
