//! Repository for the `internships` table.

use folio_core::types::Record;

use crate::gateway;
use crate::{DbPool, StoreError};

/// Provides read access to internships.
pub struct InternshipRepo;

impl InternshipRepo {
    /// List internships, most recent `start_date` first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Record>, StoreError> {
        gateway::fetch_records(
            pool,
            "SELECT * FROM internships ORDER BY start_date DESC",
            &[],
        )
        .await
    }
}
