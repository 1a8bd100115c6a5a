//! Handlers for the `/clients` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::client::{Client, CreateClient};
use folio_db::repositories::ClientRepo;

use super::{not_found, parse_id};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let doc = state.db.snapshot().await?;
    Ok(Json(ClientRepo::list(&doc).to_vec()))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateClient>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let Json(input) = payload?;
    let client = state
        .db
        .transact(|doc| Ok::<_, AppError>(ClientRepo::create(doc, input)))
        .await?;
    tracing::info!(
        client_id = client.id,
        name = client.name().unwrap_or_default(),
        "Client added"
    );
    Ok((StatusCode::CREATED, Json(client)))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let removed = state
        .db
        .transact(|doc| {
            parse_id(&id)
                .and_then(|client_id| ClientRepo::delete(doc, client_id))
                .ok_or_else(|| not_found("Client", &id))
        })
        .await?;
    tracing::info!(client_id = removed.id, "Client deleted");
    Ok(Json(MessageResponse {
        message: "Client deleted successfully",
    }))
}
