//! Integration test utilities for the lab secretary
//!
//! Spawns the real Axum application on an ephemeral port, backed by in-memory
//! doubles of the event store and the chat transport.

pub mod fixtures;
pub mod helpers;

pub use secretary_test_utils::*;
pub use fixtures::*;
pub use helpers::*;
