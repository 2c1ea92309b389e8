//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in secretary-core.

mod error;
mod event;

pub use event::PgEventRepository;
