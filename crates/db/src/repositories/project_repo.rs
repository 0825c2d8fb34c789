//! Repository for the `projects` table.

use portfolio_core::slug::slugify;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, category, thumbnail, video_url, description, created_at";

/// Read-mostly access to portfolio projects.
///
/// The HTTP API only ever lists and retrieves; [`ProjectRepo::create`]
/// serves the administrative/seed path and the integration tests.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// The slug is derived from the title; a duplicate derived slug is
    /// rejected by the `uq_projects_slug` constraint.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, slug, category, thumbnail, video_url, description)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(slugify(&input.title))
            .bind(input.category)
            .bind(&input.thumbnail)
            .bind(&input.video_url)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first. Ties on `created_at`
    /// fall back to insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
