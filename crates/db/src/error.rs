/// Failure of a call into the store.
///
/// Every variant carries its underlying cause. Nothing in this crate
/// retries; callers see the first failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection, pool or query failure reported by sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row could not be mapped onto the expected shape.
    #[error("Row decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Applying the embedded migrations failed.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
