//! Destination database pool

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Create a pool without connecting.
///
/// The first query opens the connection, so an unreachable database fails
/// the step that needs it rather than pipeline construction. Steps that never
/// touch the database can run without one.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_lazy(&config.url)?;

    tracing::debug!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}
