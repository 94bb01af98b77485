use std::sync::Mutex;

use async_trait::async_trait;
use meeting_rooms_api::{
    auth_integration::interfaces::acl::authentication_facade::{
        AuthIntegrationError, AuthenticationFacade, IssuedAccessToken, VerifiedCallerContext,
    },
    users::{
        domain::model::enums::users_domain_error::UsersDomainError,
        infrastructure::{
            persistence::repositories::user_account_repository::{
                NewUserAccountRecord, UserAccountRecord, UserAccountRepository, UserProfileUpdate,
            },
            security::password_hasher::PasswordHasher,
        },
    },
};

#[derive(Default)]
struct FakeUserAccountState {
    users: Vec<UserAccountRecord>,
    next_id: i64,
    insert_calls: usize,
}

pub struct FakeUserAccountRepository {
    state: Mutex<FakeUserAccountState>,
}

impl FakeUserAccountRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeUserAccountState {
                users: Vec::new(),
                next_id: 1,
                insert_calls: 0,
            }),
        }
    }

    pub fn seed_user(&self, user: UserAccountRecord) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.next_id = state.next_id.max(user.id + 1);
        state.users.push(user);
    }

    pub fn users(&self) -> Vec<UserAccountRecord> {
        self.state.lock().expect("mutex poisoned").users.clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").insert_calls
    }
}

#[async_trait]
impl UserAccountRepository for FakeUserAccountRepository {
    async fn insert_user(
        &self,
        new_user: NewUserAccountRecord,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.insert_calls += 1;

        let record = UserAccountRecord {
            id: state.next_id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role_name: new_user.role_name,
        };
        state.next_id += 1;
        state.users.push(record.clone());

        Ok(record)
    }

    async fn find_by_id(
        &self,
        user_id: i64,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserAccountRecord>, UsersDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state
            .users
            .iter()
            .find(|user| user.username == username || user.email == email)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserAccountRecord>, UsersDomainError> {
        Ok(self.state.lock().expect("mutex poisoned").users.clone())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        update: UserProfileUpdate,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(UsersDomainError::UserNotFound)?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }

        Ok(user.clone())
    }

    async fn update_role(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<UserAccountRecord, UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(UsersDomainError::UserNotFound)?;

        user.role_name = role_name.to_string();

        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), UsersDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        let before = state.users.len();
        state.users.retain(|user| user.id != user_id);

        if state.users.len() == before {
            return Err(UsersDomainError::UserNotFound);
        }

        Ok(())
    }
}

pub struct FakePasswordHasher;

impl FakePasswordHasher {
    pub fn new() -> Self {
        Self
    }

    pub fn hash_for(password: &str) -> String {
        format!("hashed:{password}")
    }
}

impl PasswordHasher for FakePasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UsersDomainError> {
        Ok(Self::hash_for(password))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UsersDomainError> {
        Ok(Self::hash_for(password) == password_hash)
    }
}

#[derive(Default)]
struct FakeAuthenticationState {
    issue_calls: usize,
}

pub struct FakeAuthenticationFacade {
    state: Mutex<FakeAuthenticationState>,
}

impl FakeAuthenticationFacade {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAuthenticationState::default()),
        }
    }

    pub fn issue_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").issue_calls
    }
}

#[async_trait]
impl AuthenticationFacade for FakeAuthenticationFacade {
    async fn issue_access_token(
        &self,
        user_id: i64,
        role_name: &str,
    ) -> Result<IssuedAccessToken, AuthIntegrationError> {
        self.state.lock().expect("mutex poisoned").issue_calls += 1;
        Ok(IssuedAccessToken {
            access_token: format!("token-{user_id}-{role_name}"),
            expires_in_seconds: 3600,
        })
    }

    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedCallerContext, AuthIntegrationError> {
        let mut parts = access_token.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("token"), Some(user_id), Some(role_name)) => {
                let user_id = user_id.parse::<i64>().map_err(|_| {
                    AuthIntegrationError::InvalidToken("malformed subject".to_string())
                })?;
                Ok(VerifiedCallerContext {
                    user_id,
                    role_name: role_name.to_string(),
                    exp_epoch_seconds: u64::MAX,
                })
            }
            _ => Err(AuthIntegrationError::InvalidToken(
                "unknown token".to_string(),
            )),
        }
    }
}
