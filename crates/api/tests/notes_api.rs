//! Note sending and scoped listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, login_as, post_json};
use serde_json::json;

#[tokio::test]
async fn admin_sends_note_to_user() {
    let (app, _) = common::build_test_app();
    let admin = login_as(&app, "boss@example.com", "admin").await;
    let ana = login_as(&app, "ana@example.com", "user").await;

    let response = post_json(
        app.clone(),
        "/notes",
        Some(&admin.token),
        json!({ "title": "Reminder", "content": "Bring ID", "recipient_id": ana.user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["sender_id"], admin.user_id.as_str());
    assert_eq!(json["data"]["body"], "Bring ID");

    let json = body_json(get(app, "/notes", Some(&ana.token)).await).await;
    assert_eq!(json["data"][0]["title"], "Reminder");
}

#[tokio::test]
async fn users_only_see_their_own_notes() {
    let (app, _) = common::build_test_app();
    let admin = login_as(&app, "boss@example.com", "admin").await;
    let ana = login_as(&app, "ana@example.com", "user").await;
    let bob = login_as(&app, "bob@example.com", "user").await;

    for (to, title) in [(&ana, "For ana"), (&bob, "For bob")] {
        let response = post_json(
            app.clone(),
            "/notes",
            Some(&admin.token),
            json!({ "title": title, "body": "x", "recipient_id": to.user_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/notes", Some(&bob.token)).await).await;
    let notes = json["data"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "For bob");

    // The sender sees everything they sent.
    let json = body_json(get(app, "/notes", Some(&admin.token)).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_title_rejected_without_write() {
    let (app, _) = common::build_test_app();
    let admin = login_as(&app, "boss@example.com", "admin").await;
    let ana = login_as(&app, "ana@example.com", "user").await;

    let response = post_json(
        app.clone(),
        "/notes",
        Some(&admin.token),
        json!({ "title": "", "body": "x", "recipient_id": ana.user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "Please fill out the title, content, and select a user."
    );

    let json = body_json(get(app, "/notes", Some(&admin.token)).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn users_cannot_send_notes() {
    let (app, _) = common::build_test_app();
    let ana = login_as(&app, "ana@example.com", "user").await;

    let response = post_json(
        app.clone(),
        "/notes",
        Some(&ana.token),
        json!({ "title": "Hi", "body": "x", "recipient_id": ana.user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(app, "/notes/recipients", Some(&ana.token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn recipients_lists_users_only() {
    let (app, _) = common::build_test_app();
    let admin = login_as(&app, "boss@example.com", "admin").await;
    let ana = login_as(&app, "ana@example.com", "user").await;

    let json = body_json(get(app, "/notes/recipients", Some(&admin.token)).await).await;
    let users = json["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], ana.user_id.as_str());
    assert_eq!(users[0]["username"], "ana");
}
