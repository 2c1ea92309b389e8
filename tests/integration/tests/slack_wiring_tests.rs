//! End-to-end test of `POST /event` through the real Slack client
//!
//! A local Axum stub stands in for the Slack Web API.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use integration_tests::{
    assert_status, fixtures::*, test_context, InMemoryEventRepository, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use secretary_slack::SlackClient;
use tokio::net::TcpListener;

type Posts = Arc<Mutex<Vec<Value>>>;

async fn post_message(State(posts): State<Posts>, Json(body): Json<Value>) -> Json<Value> {
    posts.lock().unwrap().push(body);
    Json(json!({"ok": true, "channel": "C", "ts": "1700000000.000100"}))
}

async fn spawn_slack_stub() -> (String, Posts) {
    let posts = Posts::default();
    let app = Router::new()
        .route("/api/chat.postMessage", post(post_message))
        .with_state(posts.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{addr}/api"), posts)
}

#[tokio::test]
async fn test_arrival_reaches_slack() {
    let (api_url, posts) = spawn_slack_stub().await;
    let events = Arc::new(InMemoryEventRepository::new());
    let slack = Arc::new(SlackClient::new("xoxb-test", api_url));
    let server = TestServer::start(test_context(events, slack).unwrap())
        .await
        .unwrap();

    let response = server.post("/event", &EventRequest::new("alice")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let posts = posts.lock().unwrap().clone();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["channel"], ALICE_CHANNEL);
    assert_eq!(posts[0]["text"], "Welcome back, alice!");
    assert_eq!(posts[0]["username"], "Lab Secretary");
    assert_eq!(posts[1]["channel"], BROADCAST_CHANNEL);
    assert_eq!(posts[1]["text"], "<@U-ALICE> has arrived.");
}
