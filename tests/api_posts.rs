//! Post API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{create_test_post, create_test_user, login, register, TestApp};

#[tokio::test]
async fn test_example_flow() {
    let app = TestApp::new();

    let registered = register(&app.server, "alice", "a@x.com", "secret1").await;
    let alice_id = registered["user"]["id"].clone();
    let token = login(&app.server, "alice", "secret1").await;

    let created = app
        .server
        .post("/api/posts")
        .authorization_bearer(&token)
        .json(&json!({ "title": "T", "content": "C" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created: Value = created.json();
    assert_eq!(created["post"]["user_id"], alice_id);
    assert_eq!(created["post"]["user"]["username"], "alice");

    let post_id = created["post"]["id"].as_str().unwrap();
    let fetched = app.server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    let fetched: Value = fetched.json();
    assert_eq!(fetched["post"]["title"], "T");
    assert_eq!(fetched["post"]["content"], "C");
    assert_eq!(fetched["post"]["comments"], json!([]));
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/posts")
        .json(&json!({ "title": "T", "content": "C" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let listed: Value = app.server.get("/api/posts").await.json();
    assert_eq!(listed, json!({ "posts": [] }));
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;

    for payload in [
        json!({ "title": "", "content": "C" }),
        json!({ "title": "T", "content": "   " }),
        json!({ "title": "x".repeat(201), "content": "C" }),
        json!({ "content": "C" }),
    ] {
        let response = app
            .server
            .post("/api/posts")
            .authorization_bearer(&alice.token)
            .json(&payload)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "accepted {payload}");
    }
}

#[tokio::test]
async fn test_list_posts_newest_first_with_comment_counts() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;

    let first = create_test_post(&app.server, &alice, "first", "C").await;
    create_test_post(&app.server, &alice, "second", "C").await;
    for text in ["a", "b"] {
        let response = app
            .server
            .post("/api/comments")
            .authorization_bearer(&alice.token)
            .json(&json!({ "content": text, "post_id": first }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let body: Value = app.server.get("/api/posts").await.json();
    let posts = body["posts"].as_array().unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["second", "first"]);
    assert_eq!(posts[0]["comment_count"], 0);
    assert_eq!(posts[1]["comment_count"], 2);
    assert_eq!(posts[1]["user"]["username"], "alice");
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = TestApp::new();

    let unknown = app.server.get(&format!("/api/posts/{}", Uuid::now_v7())).await;
    assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);

    let not_a_uuid = app.server.get("/api/posts/42").await;
    assert_eq!(not_a_uuid.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_own_post_partially() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let response = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "C2" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["post"]["title"], "T");
    assert_eq!(body["post"]["content"], "C2");
    assert_eq!(body["post"]["user"]["username"], "alice");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_with_blank_title_is_rejected() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let response = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = app.server.get(&format!("/api/posts/{post_id}")).await.json();
    assert_eq!(body["post"]["title"], "T");
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let update = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&bob.token)
        .json(&json!({ "title": "hijacked" }))
        .await;
    assert_eq!(update.status_code(), StatusCode::FORBIDDEN);

    let delete = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&bob.token)
        .await;
    assert_eq!(delete.status_code(), StatusCode::FORBIDDEN);

    let body: Value = app.server.get(&format!("/api/posts/{post_id}")).await.json();
    assert_eq!(body["post"]["title"], "T");
}

#[tokio::test]
async fn test_update_with_malformed_body_checks_ownership_first() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let by_bob = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&bob.token)
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(by_bob.status_code(), StatusCode::FORBIDDEN);

    let by_alice = app
        .server
        .put(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice.token)
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(by_alice.status_code(), StatusCode::BAD_REQUEST);

    let missing = app
        .server
        .put(&format!("/api/posts/{}", Uuid::now_v7()))
        .authorization_bearer(&bob.token)
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_or_delete_missing_post() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let missing = Uuid::now_v7();

    let update = app
        .server
        .put(&format!("/api/posts/{missing}"))
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "T" }))
        .await;
    assert_eq!(update.status_code(), StatusCode::NOT_FOUND);

    let delete = app
        .server
        .delete(&format!("/api/posts/{missing}"))
        .authorization_bearer(&alice.token)
        .await;
    assert_eq!(delete.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_removes_comments() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let comment = app
        .server
        .post("/api/comments")
        .authorization_bearer(&bob.token)
        .json(&json!({ "content": "hi", "post_id": post_id }))
        .await;
    assert_eq!(comment.status_code(), StatusCode::CREATED);

    let delete = app
        .server
        .delete(&format!("/api/posts/{post_id}"))
        .authorization_bearer(&alice.token)
        .await;
    assert_eq!(delete.status_code(), StatusCode::OK);
    assert!(delete.json::<Value>()["message"].is_string());

    let fetched = app.server.get(&format!("/api/posts/{post_id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::NOT_FOUND);

    use inkpost::backend::store::BlogStore;
    assert!(app.store.comments_for_post(post_id).await.unwrap().is_empty());
}
