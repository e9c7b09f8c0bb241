use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    /// The client-visible message, without the layer prefix.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::Validation(msg)
            | ServiceError::Conflict(msg)
            | ServiceError::NotFound(msg) => msg,
            ServiceError::Model(e) => e.message(),
        }
    }
}
