//! Error types for class model operations.

use thiserror::Error;

/// Errors that can occur in the class model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The class has not been registered.
    #[error("unknown class: {name}")]
    UnknownClass { name: String },

    /// A class with this name is already registered.
    #[error("class already registered: {name}")]
    DuplicateClass { name: String },

    /// Abstract classes cannot be instantiated.
    #[error("cannot instantiate abstract class: {name}")]
    AbstractClass { name: String },

    /// A class declares two fields with the same name.
    #[error("duplicate field `{field}` declared on class {class}")]
    DuplicateField { class: String, field: String },

    /// No field with this name is declared anywhere along the chain.
    #[error("unknown field `{field}` on class {class}")]
    UnknownField { class: String, field: String },

    /// The field exists but is not visible from the access context.
    #[error("field `{field}` on class {class} is not accessible from {context}")]
    VisibilityDenied {
        class: String,
        field: String,
        context: String,
    },

    /// Static fields have no per-instance storage.
    #[error("field `{field}` on class {class} is static")]
    StaticField { class: String, field: String },

    /// A registry lock was poisoned by a panicking writer.
    #[error("registry lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Convenience type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
