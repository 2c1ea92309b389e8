//! Model to entity mappers
//!
//! Rows are converted with `TryFrom` since `event_type` is stored as text
//! and a row written by another tool could hold an unknown value.

mod event;
