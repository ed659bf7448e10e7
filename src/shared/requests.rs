//! API Request Types
//!
//! Payloads accepted by the JSON endpoints. Each type knows how to validate
//! itself; handlers call `validate()` before touching the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;
/// bcrypt only reads this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;
/// Column width of `users.username` and `users.email`
pub const MAX_IDENTITY_LEN: usize = 100;
/// Column width of `posts.title`
pub const MAX_TITLE_LEN: usize = 200;

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

fn max_chars(field: &str, value: &str, max: usize) -> Result<(), SharedError> {
    if value.chars().count() > max {
        return Err(SharedError::validation(
            field,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Basic shape check: one '@' with something on both sides and a dot in the domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("username", &self.username)?;
        max_chars("username", &self.username, MAX_IDENTITY_LEN)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SharedError::validation(
                "password",
                format!("password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("password must be at most {MAX_PASSWORD_BYTES} bytes"),
            ));
        }

        require("email", &self.email)?;
        max_chars("email", &self.email, MAX_IDENTITY_LEN)?;
        if !is_valid_email(&self.email) {
            return Err(SharedError::validation("email", "invalid email format"));
        }
        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("username", &self.username)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "password is required"));
        }
        Ok(())
    }
}

/// New post
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_title(&self.title)?;
        require("content", &self.content)
    }
}

fn validate_title(title: &str) -> Result<(), SharedError> {
    require("title", title)?;
    max_chars("title", title, MAX_TITLE_LEN)
}

/// Partial update of a post.
///
/// An absent (or `null`) field keeps the stored value. A present field
/// replaces it and follows the same rules as [`CreatePostRequest`].
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            require("content", content)?;
        }
        Ok(())
    }

    /// True when the request would not change anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// New comment on an existing post
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(default)]
    pub post_id: Option<Uuid>,
}

impl CreateCommentRequest {
    /// Validates the payload and returns the target post id
    pub fn validate(&self) -> Result<Uuid, SharedError> {
        require("content", &self.content)?;
        self.post_id
            .ok_or_else(|| SharedError::validation("post_id", "post_id is required"))
    }
}
