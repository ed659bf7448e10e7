/**
 * Account Operations
 *
 * Register, login, and current-user lookup. The service only depends on the
 * `BlogStore` port plus the password hasher and token issuer it is given.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - Unknown username and wrong password produce the same `Unauthorized`
 * - Neither the password nor its hash ever leaves this module
 */

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::store::{BlogStore, NewUser, StoreError};
use crate::shared::requests::MAX_PASSWORD_BYTES;
use crate::shared::{LoginRequest, RegisterRequest, UserSummary};

const INVALID_CREDENTIALS: &str = "invalid username or password";

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn BlogStore>,
    passwords: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn BlogStore>, passwords: PasswordHasher, tokens: TokenService) -> Self {
        Self { store, passwords, tokens }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResult<UserSummary> {
        request.validate()?;

        if self.store.identity_taken(&request.username, &request.email).await? {
            tracing::warn!("Username or email already exists: {} / {}", request.username, request.email);
            return Err(ApiError::conflict("username or email already exists"));
        }

        let password_hash = self.passwords.hash(&request.password).await?;

        let user = self
            .store
            .insert_user(NewUser {
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // lost a race with a concurrent registration
                StoreError::Conflict(_) => ApiError::conflict("username or email already exists"),
                other => other.into(),
            })?;

        tracing::info!("User registered: {} ({})", user.username, user.id);
        Ok(user.summary())
    }

    /// Verify credentials and issue a bearer token
    pub async fn login(&self, request: LoginRequest) -> ApiResult<(String, UserSummary)> {
        request.validate()?;

        // could never have been registered, and bcrypt would truncate it
        if request.password.len() > MAX_PASSWORD_BYTES {
            tracing::warn!("Overlong password for user: {}", request.username);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let Some(user) = self.store.find_user_by_username(&request.username).await? else {
            tracing::warn!("Login for unknown user: {}", request.username);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.passwords.verify(&request.password, &user.password_hash).await? {
            tracing::warn!("Invalid password for user: {}", request.username);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self
            .tokens
            .issue(user.id, &user.username)
            .map_err(|e| ApiError::internal(format!("failed to create token: {e}")))?;

        tracing::info!("User logged in: {} ({})", user.username, user.id);
        Ok((token, user.summary()))
    }

    pub async fn current_user(&self, user_id: Uuid) -> ApiResult<UserSummary> {
        self.store
            .find_user_by_id(user_id)
            .await?
            .map(|user| user.summary())
            .ok_or_else(|| ApiError::not_found("user not found"))
    }
}
