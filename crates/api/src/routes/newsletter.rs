use axum::routing::get;
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Routes mounted at `/newsletter`. Subscribers cannot be deleted.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(newsletter::list).post(newsletter::subscribe))
}
