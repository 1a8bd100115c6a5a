use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activity`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activity::recent))
}
