pub mod activity;
pub mod clients;
pub mod contacts;
pub mod frontend;
pub mod health;
pub mod newsletter;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects            list, create
/// /projects/{id}       delete
///
/// /clients             list, create
/// /clients/{id}        delete
///
/// /contacts            list, submit
///
/// /newsletter          list, subscribe
///
/// /activity            five most recent entries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/clients", clients::router())
        .nest("/contacts", contacts::router())
        .nest("/newsletter", newsletter::router())
        .nest("/activity", activity::router())
}
