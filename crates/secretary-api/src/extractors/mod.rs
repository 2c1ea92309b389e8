//! Axum extractors for request handling
//!
//! Both extractors reject with [`ApiError`](crate::response::ApiError) so every
//! malformed request gets the same `{"error": ...}` body.

mod query;
mod validated;

pub use query::ApiQuery;
pub use validated::ValidatedJson;
