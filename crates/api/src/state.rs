use std::sync::Arc;

use folio_db::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The content document and its write lock.
    pub db: Arc<Database>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
