use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    /// The client-visible message, without the layer prefix.
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation(msg) => msg,
        }
    }
}
