//! Project aggregation.
//!
//! The projects query is a `LEFT JOIN` of `projects` against
//! `project_images`, so each project appears once per image (or once with a
//! `NULL` image when it has none). [`group_project_rows`] folds those flat
//! rows back into one [`Project`] per identifier.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the `projects LEFT JOIN project_images` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImageRow {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_id: Option<String>,
    pub content: Option<String>,
    pub project_link: Option<String>,
    /// `None` when the project has no images (the join produced `NULL`).
    pub image_url: Option<String>,
}

/// A project with all of its image URLs, as served by `GET /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_id: Option<String>,
    pub content: Option<String>,
    pub project_link: Option<String>,
    pub images: Vec<String>,
}

impl Project {
    fn from_first_row(row: ProjectImageRow) -> (Self, Option<String>) {
        let project = Self {
            id: row.id,
            title: row.title,
            description: row.description,
            thumbnail_url: row.thumbnail_url,
            video_id: row.video_id,
            content: row.content,
            project_link: row.project_link,
            images: Vec::new(),
        };
        (project, row.image_url)
    }

    /// Whether `row` carries the same shared fields as this project.
    fn shares_fields_with(&self, row: &ProjectImageRow) -> bool {
        self.title == row.title
            && self.description == row.description
            && self.thumbnail_url == row.thumbnail_url
            && self.video_id == row.video_id
            && self.content == row.content
            && self.project_link == row.project_link
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Group joined rows into projects, one per distinct `id`.
///
/// Output order is the order in which each `id` first appears. Image order
/// within a project follows row order. Shared fields are taken from the
/// first row seen for an `id`; later rows only contribute their image URL.
pub fn group_project_rows<I>(rows: I) -> Vec<Project>
where
    I: IntoIterator<Item = ProjectImageRow>,
{
    let mut projects: IndexMap<DbId, Project> = IndexMap::new();

    for row in rows {
        match projects.entry(row.id) {
            Entry::Occupied(mut slot) => {
                let project = slot.get_mut();
                if !project.shares_fields_with(&row) {
                    tracing::debug!(
                        project_id = row.id,
                        "Joined row disagrees with first-seen project fields; keeping first"
                    );
                }
                if let Some(url) = row.image_url {
                    project.images.push(url);
                }
            }
            Entry::Vacant(slot) => {
                let (mut project, image_url) = Project::from_first_row(row);
                if let Some(url) = image_url {
                    project.images.push(url);
                }
                slot.insert(project);
            }
        }
    }

    projects.into_values().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
