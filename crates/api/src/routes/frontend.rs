//! Static frontend: the two HTML entry points plus the public asset directory.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Routes for the site and admin pages.
///
/// ```text
/// GET /        -> {frontend_dir}/index.html
/// GET /admin   -> {frontend_dir}/admin.html
/// ```
///
/// Paths matching no other route fall back to files under `public_dir`.
/// The admin page is not access-controlled.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(config.frontend_dir.join("index.html")))
        .route_service(
            "/admin",
            ServeFile::new(config.frontend_dir.join("admin.html")),
        )
        .fallback_service(ServeDir::new(&config.public_dir))
}
