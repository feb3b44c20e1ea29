mod common;

use reqwest::StatusCode;
use serde_json::json;

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ── Registration ────────────────────────────────────────────────

#[tokio::test]
async fn register_appends_row_and_echoes_fields() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .register(&json!({
            "name": "Ada",
            "usn": "1XX22CS001",
            "email": "ada@example.com",
            "phone": "555-0100",
            "event": "Hack",
            "participantId": "P1",
        }))
        .await;

    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("Ada"));
    assert_eq!(body["data"]["participantId"], json!("P1"));
    assert_eq!(body["data"]["event"], json!("Hack"));

    let rows = app.appended_rows().await;
    assert_eq!(rows.len(), 1);
    let (tab, row) = &rows[0];
    assert_eq!(tab, "Registrations");
    assert_eq!(
        &row[..6],
        &[
            "Ada".to_string(),
            "1XX22CS001".to_string(),
            "ada@example.com".to_string(),
            "555-0100".to_string(),
            "Hack".to_string(),
            "P1".to_string(),
        ]
    );
    // registeredAt is stamped server-side
    assert!(!row[6].is_empty());
}

#[tokio::test]
async fn register_optional_fields_may_be_omitted() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .register(&json!({ "name": "Ada", "participantId": "P1", "event": "Hack" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("Ada"));
    assert_eq!(body["data"]["participantId"], json!("P1"));
    assert_eq!(body["data"]["event"], json!("Hack"));

    let rows = app.appended_rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1[0], "Ada");
    assert_eq!(rows[0].1[1], ""); // usn omitted
}

#[tokio::test]
async fn register_missing_name_is_rejected_without_backend_call() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .register(&json!({ "participantId": "P1", "event": "Hack" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(!body["message"].as_str().unwrap().is_empty());

    assert!(app.appended_rows().await.is_empty());
    assert_eq!(app.token_requests(), 0);
}

#[tokio::test]
async fn register_empty_participant_id_is_rejected() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .register(&json!({ "name": "Ada", "participantId": "  " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(app.appended_rows().await.is_empty());
}

#[tokio::test]
async fn duplicate_registrations_append_duplicate_rows() {
    let app = common::spawn_app().await;

    let payload = json!({ "name": "Ada", "participantId": "P1" });
    let (_, s1) = app.register(&payload).await;
    let (_, s2) = app.register(&payload).await;

    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);
    // No dedup by participantId; every accepted request appends
    assert_eq!(app.appended_rows().await.len(), 2);
}

#[tokio::test]
async fn register_backend_failure_returns_error_envelope() {
    let app = common::spawn_app().await;
    app.fail_appends();

    let (body, status) = app
        .register(&json!({ "name": "Ada", "participantId": "P1" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("Quota exceeded for append")
    );
}

// ── Submission ──────────────────────────────────────────────────

#[tokio::test]
async fn submit_appends_row_to_submissions_tab() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .submit(&json!({
            "participantId": "P1",
            "eventCategory": "Photography",
            "description": "sunset",
            "mediaUrl": "https://x/y.jpg",
        }))
        .await;

    assert_eq!(status, StatusCode::OK, "submit failed: {body}");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["participantId"], json!("P1"));
    assert_eq!(body["data"]["eventCategory"], json!("Photography"));
    assert_eq!(body["data"]["submissionLink"], json!("https://x/y.jpg"));

    let rows = app.appended_rows().await;
    assert_eq!(rows.len(), 1);
    let (tab, row) = &rows[0];
    assert_eq!(tab, "Submissions");
    assert_eq!(
        &row[..4],
        &[
            "P1".to_string(),
            "Photography".to_string(),
            "sunset".to_string(),
            "https://x/y.jpg".to_string(),
        ]
    );
    assert!(!row[4].is_empty());
}

#[tokio::test]
async fn submit_missing_any_required_field_is_rejected() {
    let app = common::spawn_app().await;

    let full = json!({
        "participantId": "P1",
        "eventCategory": "Photography",
        "description": "sunset",
        "mediaUrl": "https://x/y.jpg",
    });

    for field in ["participantId", "eventCategory", "description", "mediaUrl"] {
        let mut partial = full.clone();
        partial.as_object_mut().unwrap().remove(field);

        let (body, status) = app.submit(&partial).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted without {field}");
        assert_eq!(body["success"], json!(false));
    }

    assert!(app.appended_rows().await.is_empty());
    assert_eq!(app.token_requests(), 0);
}

#[tokio::test]
async fn submit_targets_second_tab_regardless_of_title() {
    let app = common::spawn_app_with_tabs(&["Main", "Entries"]).await;

    let (_, status) = app
        .submit(&json!({
            "participantId": "P1",
            "eventCategory": "Reels",
            "description": "clip",
            "mediaUrl": "https://x/z.mp4",
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = app.appended_rows().await;
    assert_eq!(rows[0].0, "Entries");
}

#[tokio::test]
async fn submit_falls_back_to_tab_named_submissions() {
    // Only one tab, so position 1 resolves nothing; the title lookup must win
    let app = common::spawn_app_with_tabs(&["Submissions"]).await;

    let (body, status) = app
        .submit(&json!({
            "participantId": "P1",
            "eventCategory": "Photography",
            "description": "sunset",
            "mediaUrl": "https://x/y.jpg",
        }))
        .await;

    assert_eq!(status, StatusCode::OK, "fallback failed: {body}");
    let rows = app.appended_rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "Submissions");
}

#[tokio::test]
async fn submit_without_resolvable_tab_is_a_server_error() {
    let app = common::spawn_app_with_tabs(&["Registrations"]).await;

    let (body, status) = app
        .submit(&json!({
            "participantId": "P1",
            "eventCategory": "Photography",
            "description": "sunset",
            "mediaUrl": "https://x/y.jpg",
        }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("Submissions"));
    // Tab resolution failed before any write was attempted
    assert!(app.appended_rows().await.is_empty());
}

#[tokio::test]
async fn submit_backend_failure_relays_the_error_message() {
    let app = common::spawn_app().await;
    app.fail_appends();

    let (body, status) = app
        .submit(&json!({
            "participantId": "P1",
            "eventCategory": "Photography",
            "description": "sunset",
            "mediaUrl": "https://x/y.jpg",
        }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Quota exceeded for append")
    );
}

// ── Token caching ───────────────────────────────────────────────

#[tokio::test]
async fn access_token_is_fetched_once_and_reused() {
    let app = common::spawn_app().await;

    let payload = json!({ "name": "Ada", "participantId": "P1" });
    let (_, s1) = app.register(&payload).await;
    let (_, s2) = app.register(&payload).await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);

    // Two requests, four backend calls, one token exchange
    assert_eq!(app.token_requests(), 1);
}
