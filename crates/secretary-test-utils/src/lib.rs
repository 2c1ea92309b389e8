//! Testing utilities for the lab secretary workspace
//!
//! In-memory doubles of the storage and chat ports, shared by the service
//! unit tests and the HTTP integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secretary_core::traits::{ChatClient, ChatMessage, EventRepository, RepoResult};
use secretary_core::{DomainError, EventType, LabEvent};

/// Event store kept in a vector
///
/// Reads and writes can be made to fail independently at any time.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<LabEvent>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads (and health check) fail from the start
    pub fn failing_reads() -> Self {
        let repo = Self::new();
        repo.set_fail_reads(true);
        repo
    }

    /// A store whose appends fail from the start
    pub fn failing_writes() -> Self {
        let repo = Self::new();
        repo.set_fail_writes(true);
        repo
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Insert an event with an explicit timestamp
    pub fn insert_at(
        &self,
        username: &str,
        event_type: EventType,
        created_at: DateTime<Utc>,
    ) -> LabEvent {
        let event = LabEvent {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: username.to_string(),
            event_type,
            created_at,
        };
        self.lock().push(event.clone());
        event
    }

    /// Every stored event, oldest first
    pub fn events(&self) -> Vec<LabEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Event types stored for `username`, oldest first
    pub fn types_for(&self, username: &str) -> Vec<EventType> {
        self.lock()
            .iter()
            .filter(|e| e.username == username)
            .map(|e| e.event_type)
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LabEvent>> {
        self.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn count_since(&self, username: &str, since: DateTime<Utc>) -> RepoResult<i64> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        let count = self
            .lock()
            .iter()
            .filter(|e| e.username == username && e.created_at >= since)
            .count();
        i64::try_from(count).map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    async fn append(&self, username: &str, event_type: EventType) -> RepoResult<LabEvent> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("write rejected".to_string()));
        }
        Ok(self.insert_at(username, event_type, Utc::now()))
    }

    async fn health_check(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Chat client that remembers every delivered message
///
/// Channels added with [`fail_channel`](Self::fail_channel) reject posts.
#[derive(Debug, Default)]
pub struct RecordingChatClient {
    sent: Mutex<Vec<ChatMessage>>,
    attempts: AtomicUsize,
    failing_channels: Mutex<HashSet<String>>,
    fail_all: AtomicBool,
}

impl RecordingChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that rejects every post
    pub fn failing() -> Self {
        let client = Self::new();
        client.set_fail_all(true);
        client
    }

    pub fn fail_channel(&self, channel: &str) {
        self.failing_channels
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(channel.to_string());
    }

    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Messages that were delivered
    pub fn sent(&self) -> Vec<ChatMessage> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Delivered messages addressed to `channel`
    pub fn sent_to(&self, channel: &str) -> Vec<ChatMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.channel == channel)
            .collect()
    }

    /// Number of post attempts, failed ones included
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn post_message(&self, message: &ChatMessage) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let failing = self.fail_all.load(Ordering::SeqCst)
            || self
                .failing_channels
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .contains(&message.channel);
        if failing {
            return Err(DomainError::NotificationError(format!(
                "{}: channel_not_found",
                message.channel
            )));
        }

        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }
}
