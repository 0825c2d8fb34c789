//! Handlers for the read-only `/projects` resource.
//!
//! Rows are created and edited through an administrative path only; these
//! handlers never mutate.

use axum::extract::{Path, State};
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::project::ProjectResponse;
use portfolio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects
///
/// All projects, most recently created first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse::from(project)))
}
