//! Handlers for the `/newsletter` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::newsletter::{NewsletterSubscriber, Subscribe};
use folio_db::repositories::NewsletterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/newsletter
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NewsletterSubscriber>>> {
    let doc = state.db.snapshot().await?;
    Ok(Json(NewsletterRepo::list(&doc).to_vec()))
}

/// POST /api/newsletter
///
/// Responds 400 if the email is already subscribed.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<Subscribe>, JsonRejection>,
) -> AppResult<(StatusCode, Json<NewsletterSubscriber>)> {
    let Json(input) = payload?;
    let subscriber = state
        .db
        .transact(|doc| NewsletterRepo::subscribe(doc, input).map_err(AppError::from))
        .await?;
    tracing::info!(subscriber_id = subscriber.id, "Newsletter subscriber added");
    Ok((StatusCode::CREATED, Json(subscriber)))
}
