//! Authentication test helpers

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

/// Registered and logged-in account
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub const TEST_PASSWORD: &str = "secret1";

pub async fn register(server: &TestServer, username: &str, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/register")
        .json(&json!({ "username": username, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json()
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: Value = response.json();
    body["token"].as_str().expect("token in login response").to_string()
}

/// Register `username` (email `<username>@example.com`) and log in
pub async fn create_test_user(server: &TestServer, username: &str) -> TestUser {
    let email = format!("{username}@example.com");
    let body = register(server, username, &email, TEST_PASSWORD).await;
    let id = body["user"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("user id in register response");
    let token = login(server, username, TEST_PASSWORD).await;

    TestUser {
        id,
        username: username.to_string(),
        email,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}

/// Create a post as `user` and return its id
pub async fn create_test_post(server: &TestServer, user: &TestUser, title: &str, content: &str) -> Uuid {
    let response = server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": title, "content": content }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    let body: Value = response.json();
    body["post"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("post id in create response")
}

/// Authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
