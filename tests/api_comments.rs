//! Comment API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use inkpost::backend::store::BlogStore;

use common::{create_test_post, create_test_user, TestApp};

#[tokio::test]
async fn test_create_comment() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let response = app
        .server
        .post("/api/comments")
        .authorization_bearer(&bob.token)
        .json(&json!({ "content": "nice post", "post_id": post_id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["comment"]["content"], "nice post");
    assert_eq!(body["comment"]["post_id"], json!(post_id));
    assert_eq!(body["comment"]["user_id"], json!(bob.id));
    assert_eq!(
        body["comment"]["user"],
        json!({ "id": bob.id, "username": "bob", "email": bob.email })
    );
}

#[tokio::test]
async fn test_create_comment_requires_token() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let response = app
        .server
        .post("/api/comments")
        .json(&json!({ "content": "hi", "post_id": post_id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_comment_validation() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    for payload in [
        json!({ "content": "", "post_id": post_id }),
        json!({ "content": "hi" }),
        json!({ "content": "hi", "post_id": "not-a-uuid" }),
    ] {
        let response = app
            .server
            .post("/api/comments")
            .authorization_bearer(&alice.token)
            .json(&payload)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "accepted {payload}");
    }
}

#[tokio::test]
async fn test_comment_on_missing_post_creates_nothing() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let missing = Uuid::now_v7();

    let response = app
        .server
        .post("/api/comments")
        .authorization_bearer(&alice.token)
        .json(&json!({ "content": "hi", "post_id": missing }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(app.store.comments_for_post(missing).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_comments_oldest_first() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    let post_id = create_test_post(&app.server, &alice, "T", "C").await;

    let empty: Value = app.server.get(&format!("/api/posts/{post_id}/comments")).await.json();
    assert_eq!(empty, json!({ "comments": [] }));

    for (user, text) in [(&bob, "first"), (&alice, "second"), (&bob, "third")] {
        let response = app
            .server
            .post("/api/comments")
            .authorization_bearer(&user.token)
            .json(&json!({ "content": text, "post_id": post_id }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app.server.get(&format!("/api/posts/{post_id}/comments")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let comments = body["comments"].as_array().unwrap();
    let listed: Vec<(&str, &str)> = comments
        .iter()
        .map(|c| (c["content"].as_str().unwrap(), c["user"]["username"].as_str().unwrap()))
        .collect();
    assert_eq!(listed, vec![("first", "bob"), ("second", "alice"), ("third", "bob")]);

    let detail: Value = app.server.get(&format!("/api/posts/{post_id}")).await.json();
    assert_eq!(detail["post"]["comments"], body["comments"]);
}

#[tokio::test]
async fn test_list_comments_bad_or_missing_post() {
    let app = TestApp::new();

    let bad = app.server.get("/api/posts/not-a-uuid/comments").await;
    assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

    let missing = app.server.get(&format!("/api/posts/{}/comments", Uuid::now_v7())).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}
