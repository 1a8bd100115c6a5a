//! Handler for the `/activity` feed.

use axum::extract::State;
use axum::Json;
use folio_db::models::activity::ActivityEntry;
use folio_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/activity -- the five most recent entries, newest first.
pub async fn recent(State(state): State<AppState>) -> AppResult<Json<Vec<ActivityEntry>>> {
    let doc = state.db.snapshot().await?;
    Ok(Json(ActivityRepo::recent(&doc).to_vec()))
}
