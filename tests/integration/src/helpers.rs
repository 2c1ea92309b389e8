//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use secretary_api::{create_app, AppState};
use secretary_core::traits::ChatClient;
use secretary_service::ServiceContext;

use secretary_test_utils::{InMemoryEventRepository, RecordingChatClient};
use crate::fixtures::{test_profiles, BROADCAST_CHANNEL};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the application on an ephemeral port
    pub async fn start(ctx: ServiceContext) -> Result<Self> {
        let app = create_app(AppState::new(ctx));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        self.post_as(path, Some("application/json"), body).await
    }

    /// Make a POST request with an arbitrary (or no) `Content-Type`
    pub async fn post_as(
        &self,
        path: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self.client.post(&url).body(body);
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        Ok(request.send().await?)
    }
}

/// A running server plus handles on its doubles
pub struct TestLab {
    pub server: TestServer,
    pub events: Arc<InMemoryEventRepository>,
    pub chat: Arc<RecordingChatClient>,
}

impl TestLab {
    /// Start a server with empty storage and a recording chat client
    pub async fn start() -> Result<Self> {
        let events = Arc::new(InMemoryEventRepository::new());
        let chat = Arc::new(RecordingChatClient::new());
        let server = TestServer::start(test_context(events.clone(), chat.clone())?).await?;
        Ok(Self {
            server,
            events,
            chat,
        })
    }
}

/// Service context over the given doubles and the fixture profiles
pub fn test_context(
    events: Arc<InMemoryEventRepository>,
    chat: Arc<dyn ChatClient>,
) -> Result<ServiceContext> {
    Ok(ServiceContext::builder()
        .event_repo(events)
        .chat_client(chat)
        .profiles(Arc::new(test_profiles()?))
        .broadcast_channel(BROADCAST_CHANNEL)
        .build()?)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
