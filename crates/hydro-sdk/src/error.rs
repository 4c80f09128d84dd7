//! Error types for the SDK surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("generation error: {0}")]
    Gen(#[from] hydro_gen::GenError),

    #[error("model error: {0}")]
    Model(#[from] hydro_model::ModelError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type SdkResult<T> = Result<T, SdkError>;
