//! Common test utilities and helpers
//!
//! - An in-process server on the in-memory store
//! - Account helpers (register, login, bearer header)

#![allow(dead_code)]

pub mod auth_helpers;

pub use auth_helpers::*;

use axum_test::TestServer;
use chrono::Duration;
use std::sync::Arc;

use inkpost::backend::auth::{PasswordHasher, TokenService};
use inkpost::backend::routes::create_router;
use inkpost::backend::server::AppState;
use inkpost::backend::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router under test plus a handle on its store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(
            store.clone(),
            PasswordHasher::new(4),
            TokenService::new(TEST_SECRET, Duration::hours(1)),
        );
        let server = TestServer::new(create_router(state)).expect("failed to start test server");
        Self { server, store }
    }
}
