//! # secretary-service
//!
//! Application layer: resolves a user's status, records events and sends
//! notifications. All dependencies are reached through [`ServiceContext`].

pub mod dto;
pub mod services;

pub use services::{
    EventRecorder, NotificationService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatusService, ToggleOutcome, ToggleService,
};
