//! Field declarations: [`Visibility`] and [`FieldDef`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared visibility of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Accessible from anywhere.
    Public,
    /// Accessible from the declaring class and its descendants.
    Protected,
    /// Accessible only from the declaring class.
    Private,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Private`].
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Protected => write!(f, "protected"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// A field as declared directly on one class.
///
/// Declaration order on a class is significant: instance slot layout and
/// field resolution both follow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field identifier as declared.
    pub name: String,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Static fields belong to the class, not to instances.
    pub is_static: bool,
    /// Initial value an instance slot is materialized with.
    pub default: Value,
}

impl FieldDef {
    /// Declare a field with the given visibility and a `null` default.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
            default: Value::Null,
        }
    }

    /// Declare a public field.
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    /// Declare a protected field.
    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Protected)
    }

    /// Declare a private field.
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    /// Set the default value new instances start with.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Mark the field as static (class-level, no instance slot).
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}
