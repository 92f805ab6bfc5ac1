#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is widened so out-of-range lookups can still be reported verbatim.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),
}
