//! Error types for field resolution.

use thiserror::Error;

use hydro_model::ModelError;

/// Errors that can occur while resolving a class's field set.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The target class (or one of its ancestors) is not registered.
    #[error("unknown class: {name}")]
    UnknownClass { name: String },

    /// The registry could not be read.
    #[error("registry error: {0}")]
    Registry(String),
}

impl From<ModelError> for ResolveError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownClass { name } => Self::UnknownClass { name },
            other => Self::Registry(other.to_string()),
        }
    }
}

/// Convenience type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
