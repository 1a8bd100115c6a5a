//! Shared response body types for API handlers.
//!
//! Collections and created records are returned bare (no envelope); only
//! acknowledgements use [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
