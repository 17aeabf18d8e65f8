//! Repository for the `education` table.

use folio_core::types::Record;

use crate::gateway;
use crate::{DbPool, StoreError};

/// Provides read access to education entries. Rows are served as-is.
pub struct EducationRepo;

impl EducationRepo {
    pub async fn list(pool: &DbPool) -> Result<Vec<Record>, StoreError> {
        gateway::fetch_records(pool, "SELECT * FROM education", &[]).await
    }
}
