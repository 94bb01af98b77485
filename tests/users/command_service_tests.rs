use meeting_rooms_api::users::domain::{
    model::{
        commands::{
            admin_create_user_command::{AdminCreateUserCommand, AdminCreateUserCommandParts},
            change_user_role_command::ChangeUserRoleCommand,
            update_user_profile_command::{
                UpdateUserProfileCommand, UpdateUserProfileCommandParts,
            },
        },
        enums::users_domain_error::UsersDomainError,
    },
    services::users_command_service::UsersCommandService,
};

use crate::support::{
    admin_create_command, caller, create_command_harness, register_command, user_record,
};
use crate::support::fakes::FakePasswordHasher;

#[tokio::test]
async fn register_assigns_regular_user_role_and_hashes_password() {
    let harness = create_command_harness();

    let record = harness
        .service
        .handle_register_user(register_command("alice", "alice@example.com", "secret"))
        .await
        .expect("registration should succeed");

    assert_eq!(record.role_name, "regular_user");
    assert_eq!(record.password_hash, FakePasswordHasher::hash_for("secret"));
    assert_eq!(harness.repository.insert_calls(), 1);
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(1, "alice", "regular_user"));

    let result = harness
        .service
        .handle_register_user(register_command("alice", "other@example.com", "secret"))
        .await;

    assert!(matches!(result, Err(UsersDomainError::DuplicateUser)));
    assert_eq!(harness.repository.insert_calls(), 0);
}

#[tokio::test]
async fn admin_creates_user_with_explicit_role() {
    let harness = create_command_harness();

    let record = harness
        .service
        .handle_admin_create_user(&caller("admin", 1), admin_create_command("audrey", "auditor"))
        .await
        .expect("admin create should succeed");

    assert_eq!(record.role_name, "auditor");
}

#[tokio::test]
async fn non_admin_cannot_create_users_with_roles() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_admin_create_user(
            &caller("facility_manager", 50),
            admin_create_command("audrey", "auditor"),
        )
        .await;

    assert!(matches!(result, Err(UsersDomainError::AccessDenied(_))));
}

#[test]
fn unknown_role_is_rejected_at_command_construction() {
    let result = AdminCreateUserCommand::new(AdminCreateUserCommandParts {
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        password: "secret".to_string(),
        role_name: "superuser".to_string(),
    });

    assert!(matches!(result, Err(UsersDomainError::InvalidRoleName)));

    let result = ChangeUserRoleCommand::new(1, "superuser".to_string());
    assert!(matches!(result, Err(UsersDomainError::InvalidRoleName)));
}

#[tokio::test]
async fn user_updates_own_profile_but_not_others() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(10, "alice", "regular_user"));
    harness
        .repository
        .seed_user(user_record(20, "bob", "regular_user"));

    let updated = harness
        .service
        .handle_update_user_profile(
            &caller("regular_user", 10),
            UpdateUserProfileCommand::new(UpdateUserProfileCommandParts {
                user_id: 10,
                username: None,
                email: Some("new@example.com".to_string()),
                password: None,
            })
            .expect("valid update command"),
        )
        .await
        .expect("self update should succeed");
    assert_eq!(updated.email, "new@example.com");

    let denied = harness
        .service
        .handle_update_user_profile(
            &caller("regular_user", 10),
            UpdateUserProfileCommand::new(UpdateUserProfileCommandParts {
                user_id: 20,
                username: None,
                email: Some("hijack@example.com".to_string()),
                password: None,
            })
            .expect("valid update command"),
        )
        .await;
    assert!(matches!(denied, Err(UsersDomainError::AccessDenied(_))));
}

#[tokio::test]
async fn password_update_is_rehashed() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(10, "alice", "regular_user"));

    let updated = harness
        .service
        .handle_update_user_profile(
            &caller("admin", 1),
            UpdateUserProfileCommand::new(UpdateUserProfileCommandParts {
                user_id: 10,
                username: None,
                email: None,
                password: Some("rotated".to_string()),
            })
            .expect("valid update command"),
        )
        .await
        .expect("admin update should succeed");

    assert_eq!(
        updated.password_hash,
        FakePasswordHasher::hash_for("rotated")
    );
}

#[tokio::test]
async fn admin_changes_user_role() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(10, "alice", "regular_user"));

    let record = harness
        .service
        .handle_change_user_role(
            &caller("admin", 1),
            ChangeUserRoleCommand::new(10, "facility_manager".to_string())
                .expect("valid role change"),
        )
        .await
        .expect("role change should succeed");

    assert_eq!(record.role_name, "facility_manager");
}

#[tokio::test]
async fn non_admin_cannot_delete_other_accounts() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(20, "bob", "regular_user"));

    let result = harness
        .service
        .handle_delete_user(&caller("auditor", 99), 20)
        .await;

    assert!(matches!(result, Err(UsersDomainError::AccessDenied(_))));
    assert_eq!(harness.repository.users().len(), 1);
}

#[tokio::test]
async fn user_deletes_own_account() {
    let harness = create_command_harness();
    harness
        .repository
        .seed_user(user_record(10, "alice", "regular_user"));

    harness
        .service
        .handle_delete_own_account(&caller("regular_user", 10))
        .await
        .expect("own account deletion should succeed");

    assert!(harness.repository.users().is_empty());
}
