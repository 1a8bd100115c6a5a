#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as the raw path segment: a non-numeric id is simply absent.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}
