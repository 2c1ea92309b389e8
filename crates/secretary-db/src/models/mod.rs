//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;

pub use event::LabEventModel;
