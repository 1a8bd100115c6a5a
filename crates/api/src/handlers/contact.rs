//! Handlers for the `/contacts` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::contact::{Contact, CreateContact};
use folio_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let doc = state.db.snapshot().await?;
    Ok(Json(ContactRepo::list(&doc).to_vec()))
}

/// POST /api/contacts
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<CreateContact>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let Json(input) = payload?;
    let contact = state
        .db
        .transact(|doc| Ok::<_, AppError>(ContactRepo::submit(doc, input)))
        .await?;
    tracing::info!(contact_id = contact.id, "Contact form submitted");
    Ok((StatusCode::CREATED, Json(contact)))
}
