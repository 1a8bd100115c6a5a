//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::project::{CreateProject, Project};
use folio_db::repositories::ProjectRepo;

use super::{not_found, parse_id};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let doc = state.db.snapshot().await?;
    Ok(Json(ProjectRepo::list(&doc).to_vec()))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload?;
    let project = state
        .db
        .transact(|doc| Ok::<_, AppError>(ProjectRepo::create(doc, input)))
        .await?;
    tracing::info!(
        project_id = project.id,
        name = project.name().unwrap_or_default(),
        "Project added"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state
        .db
        .transact(|doc| {
            parse_id(&id)
                .and_then(|project_id| ProjectRepo::delete(doc, project_id))
                .ok_or_else(|| not_found("Project", &id))
        })
        .await?;
    tracing::info!(project_id = removed.id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}
