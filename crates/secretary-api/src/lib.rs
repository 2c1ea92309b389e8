//! # secretary-api
//!
//! REST API server built with Axum framework.
//!
//! Routes:
//! - `GET /ping` liveness probe
//! - `GET /status?name=` current status of a user
//! - `POST /event` toggle a user's status
//! - `GET /health/ready` readiness probe (database reachability)

pub mod cli;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
