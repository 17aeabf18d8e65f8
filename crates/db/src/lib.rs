//! MySQL access for the portfolio backend.
//!
//! - [`create_pool`] builds the process-wide connection pool.
//! - [`gateway`] runs parameterized SQL and decodes rows into JSON records.
//! - [`repositories`] hold the fixed queries behind each endpoint.
//! - [`PortfolioStore`] is the seam handlers depend on; [`MySqlStore`] is the
//!   production implementation.

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub mod error;
pub mod gateway;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{MySqlStore, PortfolioStore};

pub type DbPool = sqlx::MySqlPool;

/// Connection settings for the MySQL pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the discrete fields below are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on simultaneously open connections.
    pub max_connections: u32,
    /// How long a caller waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    fn connect_options(&self) -> Result<MySqlConnectOptions, StoreError> {
        if let Some(url) = &self.url {
            return Ok(MySqlConnectOptions::from_str(url)?);
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

/// Create the connection pool.
///
/// The pool connects lazily: no connection is opened until the first query,
/// so the server can start (and report through `/mysql-health`) while the
/// database is unreachable.
pub fn create_pool(config: &DatabaseConfig) -> Result<DbPool, StoreError> {
    let options = config.connect_options()?;

    Ok(MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}

/// Acquire a connection from the pool and release it immediately.
pub async fn health_check(pool: &DbPool) -> Result<(), StoreError> {
    let conn = pool.acquire().await?;
    drop(conn);
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
