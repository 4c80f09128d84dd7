//! Resolved field descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use hydro_model::{SlotKey, Visibility};

/// One field the hydrator must handle, as resolved against the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier as declared.
    pub name: String,
    /// The class in the chain that declares the surviving slot.
    pub declaring_class: String,
    /// Visibility of the surviving declaration.
    pub visibility: Visibility,
    /// Position of the declaring class in the chain (0 = root ancestor).
    pub chain_depth: usize,
}

impl FieldDescriptor {
    /// Accumulator key this descriptor occupies in a resolved set.
    pub fn key(&self) -> FieldKey {
        if self.visibility.is_private() {
            FieldKey::Qualified {
                class: self.declaring_class.clone(),
                name: self.name.clone(),
            }
        } else {
            FieldKey::Bare(self.name.clone())
        }
    }

    /// Raw storage slot this descriptor is bound to.
    pub fn slot_key(&self) -> SlotKey {
        if self.visibility.is_private() {
            SlotKey::Private {
                class: self.declaring_class.clone(),
                name: self.name.clone(),
            }
        } else {
            SlotKey::Shared(self.name.clone())
        }
    }
}

/// Key under which a descriptor survives in a [`ResolvedFieldSet`].
///
/// Non-private fields collapse to one entry per bare name across the whole
/// chain; private fields are qualified by their declaring class and are
/// therefore never dropped by a same-named private declared elsewhere.
///
/// [`ResolvedFieldSet`]: crate::resolver::ResolvedFieldSet
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    /// Unified key for all non-private declarations of this name.
    Bare(String),
    /// Distinct key for one class's private declaration.
    Qualified { class: String, name: String },
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(name) => write!(f, "{name}"),
            Self::Qualified { class, name } => write!(f, "{class}::{name}"),
        }
    }
}
