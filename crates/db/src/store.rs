//! The store seam used by the HTTP handlers.

use async_trait::async_trait;
use folio_core::contact::ContactMessage;
use folio_core::portfolio::ProjectImageRow;
use folio_core::types::Record;

use crate::repositories::{ContactRepo, EducationRepo, InternshipRepo, ProjectRepo, SkillRepo};
use crate::{DbPool, StoreError};

/// Everything the API needs from the relational store.
///
/// Each method is one independent statement; implementations must not hold
/// state across calls beyond their connection pool.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Check that a connection can be acquired and released.
    async fn ping(&self) -> Result<(), StoreError>;

    /// The flat `projects LEFT JOIN project_images` rows.
    async fn project_rows(&self) -> Result<Vec<ProjectImageRow>, StoreError>;

    async fn skills(&self) -> Result<Vec<Record>, StoreError>;

    async fn education(&self) -> Result<Vec<Record>, StoreError>;

    /// Internships, most recent start date first.
    async fn internships(&self) -> Result<Vec<Record>, StoreError>;

    /// Persist a contact submission, returning its row id.
    async fn insert_contact(&self, message: &ContactMessage) -> Result<u64, StoreError>;

    /// Release pooled resources. Called once during shutdown.
    async fn close(&self);
}

/// [`PortfolioStore`] backed by a MySQL pool.
#[derive(Clone)]
pub struct MySqlStore {
    pool: DbPool,
}

impl MySqlStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for MySqlStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await
    }

    async fn project_rows(&self) -> Result<Vec<ProjectImageRow>, StoreError> {
        ProjectRepo::list_with_images(&self.pool).await
    }

    async fn skills(&self) -> Result<Vec<Record>, StoreError> {
        SkillRepo::list(&self.pool).await
    }

    async fn education(&self) -> Result<Vec<Record>, StoreError> {
        EducationRepo::list(&self.pool).await
    }

    async fn internships(&self) -> Result<Vec<Record>, StoreError> {
        InternshipRepo::list(&self.pool).await
    }

    async fn insert_contact(&self, message: &ContactMessage) -> Result<u64, StoreError> {
        ContactRepo::create(&self.pool, message).await
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
