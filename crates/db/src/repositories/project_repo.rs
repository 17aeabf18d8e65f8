//! Repository for the `projects` and `project_images` tables.

use folio_core::portfolio::ProjectImageRow;

use crate::gateway;
use crate::{DbPool, StoreError};

/// One row per (project, image) pair; projects without images appear once
/// with a `NULL` `image_url`.
const LIST_WITH_IMAGES: &str = "
    SELECT p.id, p.title, p.description, p.thumbnail_url, p.video_id,
           p.content, p.project_link, pi.image_url
    FROM projects p
    LEFT JOIN project_images pi ON p.id = pi.project_id
    ORDER BY p.id";

/// Provides read access to projects and their images.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Fetch the flat project/image join. Grouping into nested projects is
    /// left to [`folio_core::portfolio::group_project_rows`].
    pub async fn list_with_images(pool: &DbPool) -> Result<Vec<ProjectImageRow>, StoreError> {
        let records = gateway::fetch_records(pool, LIST_WITH_IMAGES, &[]).await?;
        records
            .into_iter()
            .map(|record| {
                serde_json::from_value(serde_json::Value::Object(record)).map_err(StoreError::from)
            })
            .collect()
    }
}
