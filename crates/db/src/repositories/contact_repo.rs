//! Repository for the `contact` table.

use folio_core::contact::ContactMessage;

use crate::gateway::{self, SqlParam};
use crate::{DbPool, StoreError};

/// Persists contact-form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a submission verbatim, returning the generated row id.
    ///
    /// Missing fields are written as `NULL`.
    pub async fn create(pool: &DbPool, message: &ContactMessage) -> Result<u64, StoreError> {
        let params = [
            SqlParam::from(message.name.clone()),
            SqlParam::from(message.email.clone()),
            SqlParam::from(message.message.clone()),
        ];
        let outcome = gateway::execute(
            pool,
            "INSERT INTO contact (name, email, message) VALUES (?, ?, ?)",
            &params,
        )
        .await?;

        tracing::debug!(contact_id = outcome.last_insert_id, "Contact message stored");
        Ok(outcome.last_insert_id)
    }
}
