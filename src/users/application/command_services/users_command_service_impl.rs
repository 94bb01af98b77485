use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    access_policy::domain::model::{
        enums::role::Role, value_objects::caller_identity::CallerIdentity,
    },
    users::{
        domain::{
            model::{
                commands::{
                    admin_create_user_command::AdminCreateUserCommand,
                    change_user_role_command::ChangeUserRoleCommand,
                    register_user_command::RegisterUserCommand,
                    update_user_profile_command::UpdateUserProfileCommand,
                },
                enums::users_domain_error::UsersDomainError,
            },
            services::users_command_service::UsersCommandService,
        },
        infrastructure::{
            persistence::repositories::user_account_repository::{
                NewUserAccountRecord, UserAccountRecord, UserAccountRepository, UserProfileUpdate,
            },
            security::password_hasher::PasswordHasher,
        },
    },
};

pub struct UsersCommandServiceImpl {
    user_repository: Arc<dyn UserAccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UsersCommandServiceImpl {
    pub fn new(
        user_repository: Arc<dyn UserAccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    fn require_admin(caller: &CallerIdentity) -> Result<(), UsersDomainError> {
        if caller.role() == Some(Role::Admin) {
            Ok(())
        } else {
            Err(UsersDomainError::AccessDenied(
                "admin privileges required".to_string(),
            ))
        }
    }

    fn require_self_or_admin(
        caller: &CallerIdentity,
        user_id: i64,
    ) -> Result<(), UsersDomainError> {
        if caller.role() == Some(Role::Admin) || caller.user_id == Some(user_id) {
            Ok(())
        } else {
            Err(UsersDomainError::AccessDenied(
                "users can only modify their own account".to_string(),
            ))
        }
    }
}

#[async_trait]
impl UsersCommandService for UsersCommandServiceImpl {
    async fn handle_register_user(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let existing = self
            .user_repository
            .find_by_username_or_email(command.username().value(), command.email().value())
            .await?;

        if existing.is_some() {
            return Err(UsersDomainError::DuplicateUser);
        }

        let password_hash = self.password_hasher.hash(command.password())?;

        let record = self
            .user_repository
            .insert_user(NewUserAccountRecord {
                username: command.username().value().to_string(),
                email: command.email().value().to_string(),
                password_hash,
                role_name: Role::RegularUser.as_str().to_string(),
            })
            .await?;

        info!(user_id = record.id, "user registered");

        Ok(record)
    }

    async fn handle_admin_create_user(
        &self,
        caller: &CallerIdentity,
        command: AdminCreateUserCommand,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        Self::require_admin(caller)?;

        let existing = self
            .user_repository
            .find_by_username_or_email(command.username().value(), command.email().value())
            .await?;

        if existing.is_some() {
            return Err(UsersDomainError::DuplicateUser);
        }

        let password_hash = self.password_hasher.hash(command.password())?;

        let record = self
            .user_repository
            .insert_user(NewUserAccountRecord {
                username: command.username().value().to_string(),
                email: command.email().value().to_string(),
                password_hash,
                role_name: command.role().as_str().to_string(),
            })
            .await?;

        info!(user_id = record.id, role = command.role().as_str(), "user created by admin");

        Ok(record)
    }

    async fn handle_update_user_profile(
        &self,
        caller: &CallerIdentity,
        command: UpdateUserProfileCommand,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        Self::require_self_or_admin(caller, command.user_id())?;

        let password_hash = command
            .password()
            .map(|password| self.password_hasher.hash(password))
            .transpose()?;

        self.user_repository
            .update_profile(
                command.user_id(),
                UserProfileUpdate {
                    username: command.username().map(|u| u.value().to_string()),
                    email: command.email().map(|e| e.value().to_string()),
                    password_hash,
                },
            )
            .await
    }

    async fn handle_change_user_role(
        &self,
        caller: &CallerIdentity,
        command: ChangeUserRoleCommand,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        Self::require_admin(caller)?;

        let record = self
            .user_repository
            .update_role(command.user_id(), command.role().as_str())
            .await?;

        info!(user_id = record.id, role = command.role().as_str(), "user role changed");

        Ok(record)
    }

    async fn handle_delete_user(
        &self,
        caller: &CallerIdentity,
        user_id: i64,
    ) -> Result<(), UsersDomainError> {
        Self::require_admin(caller)?;

        self.user_repository.delete_user(user_id).await?;

        warn!(user_id, "user deleted by admin");

        Ok(())
    }

    async fn handle_delete_own_account(
        &self,
        caller: &CallerIdentity,
    ) -> Result<(), UsersDomainError> {
        let user_id = caller.user_id.ok_or_else(|| {
            UsersDomainError::AccessDenied("authenticated caller required".to_string())
        })?;

        self.user_repository.delete_user(user_id).await?;

        info!(user_id, "user deleted own account");

        Ok(())
    }
}
