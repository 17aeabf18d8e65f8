//! Repository for the `skills` table.

use folio_core::types::Record;

use crate::gateway;
use crate::{DbPool, StoreError};

/// Provides read access to skills. Rows are served as-is.
pub struct SkillRepo;

impl SkillRepo {
    /// List every skill row.
    pub async fn list(pool: &DbPool) -> Result<Vec<Record>, StoreError> {
        gateway::fetch_records(pool, "SELECT * FROM skills", &[]).await
    }
}
