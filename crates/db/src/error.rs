use std::path::PathBuf;

/// Failures reading or writing the persisted document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to {op} '{}': {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Document store has not been initialized")]
    Uninitialized,
}

impl StoreError {
    /// Adapter for `map_err` that tags an I/O failure with the operation and path.
    pub(crate) fn io(
        op: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { op, path, source }
    }
}
