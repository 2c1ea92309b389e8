//! Database connection pool management

mod postgres;

pub use postgres::{create_lazy_pool, wait_for_database, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
