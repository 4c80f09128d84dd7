//! Error taxonomy for hydrator synthesis and use.
//!
//! No error here is retried or recovered internally; every failure
//! propagates to the immediate caller as a distinct condition.

use thiserror::Error;

use hydro_resolve::ResolveError;

/// Errors produced while building or using a generated hydrator.
#[derive(Debug, Error)]
pub enum GenError {
    /// The target class is not a valid generation target (unknown,
    /// abstract, or otherwise not introspectable).
    #[error("unsupported type {class}: {reason}")]
    UnsupportedType { class: String, reason: String },

    /// The generator strategy rejected or failed to produce the artifact
    /// (name collision, serialization failure, write/load failure).
    #[error("generation failed for artifact {artifact}: {reason}")]
    Generation { artifact: String, reason: String },

    /// A field slot could not be read or written at extract/hydrate time.
    /// The whole operation fails; partial results would break fidelity.
    #[error("field access failed for `{field}`: {reason}")]
    FieldAccess { field: String, reason: String },

    /// Field resolution failed for the target class.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Convenience type alias for synthesis operations.
pub type Result<T> = std::result::Result<T, GenError>;
