use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    users::{
        domain::model::{
            commands::{
                admin_create_user_command::AdminCreateUserCommand,
                change_user_role_command::ChangeUserRoleCommand,
                register_user_command::RegisterUserCommand,
                update_user_profile_command::UpdateUserProfileCommand,
            },
            enums::users_domain_error::UsersDomainError,
        },
        infrastructure::persistence::repositories::user_account_repository::UserAccountRecord,
    },
};

#[async_trait]
pub trait UsersCommandService: Send + Sync {
    async fn handle_register_user(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn handle_admin_create_user(
        &self,
        caller: &CallerIdentity,
        command: AdminCreateUserCommand,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn handle_update_user_profile(
        &self,
        caller: &CallerIdentity,
        command: UpdateUserProfileCommand,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn handle_change_user_role(
        &self,
        caller: &CallerIdentity,
        command: ChangeUserRoleCommand,
    ) -> Result<UserAccountRecord, UsersDomainError>;

    async fn handle_delete_user(
        &self,
        caller: &CallerIdentity,
        user_id: i64,
    ) -> Result<(), UsersDomainError>;

    async fn handle_delete_own_account(
        &self,
        caller: &CallerIdentity,
    ) -> Result<(), UsersDomainError>;
}
