//! Portfolio project entity model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category: Category,
    /// Object-storage URL of the cover image.
    pub thumbnail: String,
    /// Optional external video link (YouTube/Vimeo); empty when absent.
    pub video_url: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project (admin/seed path; not exposed over HTTP).
///
/// The slug is derived from `title` at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category: Category,
    pub thumbnail: String,
    /// Defaults to the empty string if omitted.
    pub video_url: Option<String>,
    pub description: String,
}

/// Wire representation of a project.
///
/// Exactly the row fields plus `category_display`, computed from the fixed
/// label table. No renaming, no nesting.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub category: Category,
    pub category_display: &'static str,
    pub thumbnail: String,
    pub video_url: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: project.id,
            title: project.title,
            slug: project.slug,
            category: project.category,
            category_display: project.category.label(),
            thumbnail: project.thumbnail,
            video_url: project.video_url,
            description: project.description,
            created_at: project.created_at,
        }
    }
}
