//! # secretary-db
//!
//! Database layer implementing the event repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and the startup wait-for-database loop
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives and their entity mappers
//! - `PgEventRepository`, the `EventRepository` implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use secretary_db::{
//!     apply_schema, create_lazy_pool, wait_for_database, DatabaseConfig, PgEventRepository,
//! };
//!
//! async fn example(app: &secretary_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from(&app.database);
//!     let pool = create_lazy_pool(&config)?;
//!     wait_for_database(&pool, config.connect_retry_interval).await;
//!     apply_schema(&pool).await?;
//!     let events = PgEventRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_lazy_pool, wait_for_database, DatabaseConfig, PgPool};
pub use repositories::PgEventRepository;
pub use schema::apply_schema;
