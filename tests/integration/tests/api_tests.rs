//! API Integration Tests
//!
//! The real router and middleware run on an ephemeral port with in-memory
//! storage and a recording chat client, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, fixtures::*, TestLab,
};
use reqwest::StatusCode;
use secretary_core::EventType;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let lab = TestLab::start().await.unwrap();
    let response = lab.server.get("/ping").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "pong");
}

#[tokio::test]
async fn test_health_ready() {
    let lab = TestLab::start().await.unwrap();
    let response = lab.server.get("/health/ready").await.unwrap();
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");
    assert!(body.database);
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let lab = TestLab::start().await.unwrap();
    lab.events.set_fail_reads(true);

    let response = lab.server.get("/health/ready").await.unwrap();
    let body: ReadinessBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert!(!body.database);
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let lab = TestLab::start().await.unwrap();

    let response = lab.server.get("/ping").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = lab
        .server
        .client
        .get(format!("{}/ping", lab.server.base_url()))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

// ============================================================================
// Status Tests
// ============================================================================

#[tokio::test]
async fn test_status_without_events_is_left() {
    let lab = TestLab::start().await.unwrap();
    let response = lab.server.get("/status?name=carol").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "carol has left...");
}

#[tokio::test]
async fn test_status_requires_name() {
    let lab = TestLab::start().await.unwrap();

    for path in ["/status", "/status?name="] {
        let response = lab.server.get(path).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(body.error.contains("name"), "unexpected error: {}", body.error);
    }
}

#[tokio::test]
async fn test_status_storage_failure_is_500() {
    let lab = TestLab::start().await.unwrap();
    lab.events.set_fail_reads(true);

    let response = lab.server.get("/status?name=alice").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error, "Internal server error");
}

#[tokio::test]
async fn test_events_before_today_do_not_count() {
    let lab = TestLab::start().await.unwrap();
    lab.events
        .insert_at("alice", EventType::Arrive, Utc::now() - Duration::days(2));

    let response = lab.server.get("/status?name=alice").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "alice has left...");
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_first_event_arrives_and_notifies() {
    let lab = TestLab::start().await.unwrap();

    let response = lab.server.post("/event", &EventRequest::new("alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().is_empty());

    assert_eq!(lab.events.types_for("alice"), vec![EventType::Arrive]);

    let personal = lab.chat.sent_to(ALICE_CHANNEL);
    assert_eq!(personal.len(), 1);
    assert_eq!(personal[0].text, "Welcome back, alice!");
    assert_eq!(personal[0].username.as_deref(), Some("Lab Secretary"));
    assert_eq!(personal[0].icon_emoji.as_deref(), Some(":robot_face:"));

    let broadcast = lab.chat.sent_to(BROADCAST_CHANNEL);
    assert_eq!(broadcast.len(), 1);
    assert_eq!(broadcast[0].text, "<@U-ALICE> has arrived.");

    let response = lab.server.get("/status?name=alice").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "alice is comming!");
}

#[tokio::test]
async fn test_second_event_leaves_with_departure_message() {
    let lab = TestLab::start().await.unwrap();
    let request = EventRequest::new("alice");

    for _ in 0..2 {
        let response = lab.server.post("/event", &request).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    assert_eq!(
        lab.events.types_for("alice"),
        vec![EventType::Arrive, EventType::Leave]
    );

    let personal = lab.chat.sent_to(ALICE_CHANNEL);
    assert_eq!(personal.len(), 2);
    assert_eq!(personal[1].text, "See you tomorrow, alice.");
    assert_eq!(lab.chat.sent_to(BROADCAST_CHANNEL).len(), 1);

    let response = lab.server.get("/status?name=alice").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "alice has left...");
}

#[tokio::test]
async fn test_status_follows_event_parity() {
    let lab = TestLab::start().await.unwrap();
    let request = EventRequest::new("bob");

    for n in 1..=5 {
        let response = lab.server.post("/event", &request).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();

        let response = lab.server.get("/status?name=bob").await.unwrap();
        let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
        let expected = if n % 2 == 1 { "bob is comming!" } else { "bob has left..." };
        assert_eq!(body.message, expected);
    }
}

#[tokio::test]
async fn test_event_body_is_json_whatever_the_content_type() {
    let lab = TestLab::start().await.unwrap();
    let body = r#"{"name":"alice"}"#;

    let response = lab
        .server
        .post_as("/event", Some("application/x-www-form-urlencoded"), body)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = lab.server.post_as("/event", None, body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        lab.events.types_for("alice"),
        vec![EventType::Arrive, EventType::Leave]
    );
    assert_eq!(lab.chat.sent_to(ALICE_CHANNEL).len(), 2);
}

#[tokio::test]
async fn test_event_requires_name() {
    let lab = TestLab::start().await.unwrap();

    for body in [r#"{}"#, r#"{"name": ""}"#, r#"{"name": 7}"#, "not json"] {
        let response = lab.server.post_raw("/event", body).await.unwrap();
        let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(!error.error.is_empty());
    }

    assert!(lab.events.events().is_empty());
    assert_eq!(lab.chat.attempts(), 0);
}

#[tokio::test]
async fn test_storage_failure_aborts_before_side_effects() {
    let lab = TestLab::start().await.unwrap();
    lab.events.set_fail_reads(true);

    let response = lab.server.post("/event", &EventRequest::new("alice")).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error, "Internal server error");

    assert!(lab.events.events().is_empty());
    assert_eq!(lab.chat.attempts(), 0);
}

#[tokio::test]
async fn test_notification_failure_still_succeeds() {
    let lab = TestLab::start().await.unwrap();
    lab.chat.set_fail_all(true);

    let response = lab.server.post("/event", &EventRequest::new("alice")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(lab.events.types_for("alice"), vec![EventType::Arrive]);
    assert!(lab.chat.sent().is_empty());
}

#[tokio::test]
async fn test_record_failure_still_notifies() {
    let lab = TestLab::start().await.unwrap();
    lab.events.set_fail_writes(true);

    let response = lab.server.post("/event", &EventRequest::new("alice")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert!(lab.events.events().is_empty());
    assert_eq!(lab.chat.sent_to(ALICE_CHANNEL).len(), 1);
    assert_eq!(lab.chat.sent_to(BROADCAST_CHANNEL).len(), 1);
}

#[tokio::test]
async fn test_unknown_user_is_recorded_without_messages() {
    let lab = TestLab::start().await.unwrap();

    let response = lab.server.post("/event", &EventRequest::new("mallory")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(lab.events.types_for("mallory"), vec![EventType::Arrive]);
    assert_eq!(lab.chat.attempts(), 0);
}

#[tokio::test]
async fn test_personal_failure_skips_broadcast() {
    let lab = TestLab::start().await.unwrap();
    lab.chat.fail_channel(ALICE_CHANNEL);

    let response = lab.server.post("/event", &EventRequest::new("alice")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(lab.chat.attempts(), 1);
    assert!(lab.chat.sent_to(BROADCAST_CHANNEL).is_empty());
    assert_eq!(lab.events.types_for("alice"), vec![EventType::Arrive]);
}

#[tokio::test]
async fn test_user_without_channel_gets_broadcast_only() {
    let lab = TestLab::start().await.unwrap();
    let request = EventRequest::new("bob");

    let response = lab.server.post("/event", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let sent = lab.chat.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, BROADCAST_CHANNEL);
    assert_eq!(sent[0].text, "<@U-BOB> has arrived.");
    assert_eq!(sent[0].icon_emoji.as_deref(), Some(":owl:"));

    let response = lab.server.post("/event", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(lab.chat.sent().len(), 1);
}
