//! Compiled access plans.
//!
//! An [`AccessPlan`] is the serializable artifact the synthesizer produces:
//! for every resolved field, one [`FieldBinding`] pairing the flat-mapping
//! key the outside world sees with the raw storage slot the hydrator
//! touches. Plans are immutable once compiled and fully determine the
//! observable behavior of a [`GeneratedHydrator`].
//!
//! [`GeneratedHydrator`]: crate::hydrator::GeneratedHydrator

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use hydro_model::{SlotKey, Visibility};
use hydro_resolve::ResolvedFieldSet;

/// One compiled plan entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Key this field is exposed under in extract/hydrate mappings.
    pub exposed: String,
    /// Raw storage slot the binding reads and writes.
    pub slot: SlotKey,
    /// Field identifier as declared.
    pub name: String,
    /// Class declaring the surviving slot.
    pub declaring_class: String,
    /// Visibility of the surviving declaration.
    pub visibility: Visibility,
}

/// The compiled access plan for one target class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPlan {
    /// Target class this plan was compiled for.
    pub class: String,
    /// Bindings in resolution order.
    pub bindings: Vec<FieldBinding>,
}

impl AccessPlan {
    /// Compile a plan from a resolved field set.
    ///
    /// Exposed-key policy: among all resolved fields sharing a bare name,
    /// the one declared deepest in the chain (most-derived) is exposed
    /// under the bare name; every other one — necessarily a shadowed
    /// private — is exposed under the qualified `"Class::name"` form. No
    /// slot is ever dropped and no two bindings share an exposed key.
    pub fn compile(class: impl Into<String>, fields: &ResolvedFieldSet) -> Self {
        // Deepest declaration per bare name owns the bare key.
        let mut deepest: HashMap<&str, usize> = HashMap::new();
        for descriptor in fields.iter() {
            let depth = deepest.entry(descriptor.name.as_str()).or_insert(0);
            *depth = (*depth).max(descriptor.chain_depth);
        }

        let bindings = fields
            .iter()
            .map(|descriptor| {
                let owns_bare = deepest[descriptor.name.as_str()] == descriptor.chain_depth;
                let exposed = if owns_bare {
                    descriptor.name.clone()
                } else {
                    format!("{}::{}", descriptor.declaring_class, descriptor.name)
                };
                FieldBinding {
                    exposed,
                    slot: descriptor.slot_key(),
                    name: descriptor.name.clone(),
                    declaring_class: descriptor.declaring_class.clone(),
                    visibility: descriptor.visibility,
                }
            })
            .collect();

        Self {
            class: class.into(),
            bindings,
        }
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the plan has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Look up a binding by exposed key.
    pub fn binding(&self, exposed: &str) -> Option<&FieldBinding> {
        self.bindings.iter().find(|b| b.exposed == exposed)
    }
}
