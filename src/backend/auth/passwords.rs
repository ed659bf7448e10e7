//! Password hashing
//!
//! bcrypt with a configurable cost. Hashing and verification are CPU-bound,
//! so both run on tokio's blocking pool.
//!
//! The non-truncating variants are used: input past bcrypt's 72-byte limit
//! is an error instead of being silently dropped.

use crate::backend::error::{ApiError, ApiResult};

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Salted, one-way hash of `password`
    pub async fn hash(&self, password: &str) -> ApiResult<String> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .map_err(|e| ApiError::internal(format!("hashing task failed: {e}")))??;
        Ok(hashed)
    }

    /// Check `password` against a stored hash
    pub async fn verify(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
            .await
            .map_err(|e| ApiError::internal(format!("verification task failed: {e}")))??;
        Ok(valid)
    }
}
