//! The field resolver.

use std::collections::HashMap;

use hydro_model::ClassRegistry;

use crate::descriptor::{FieldDescriptor, FieldKey};
use crate::error::Result;

/// Ordered, de-duplicated set of fields resolved for one class.
///
/// At most one descriptor survives per [`FieldKey`]. Iteration order is
/// root-to-derived, declaration order within a class; when a non-private
/// field is hidden by a derived redeclaration, the surviving descriptor
/// keeps the original position but carries the most-derived declaring class
/// and visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedFieldSet {
    descriptors: Vec<FieldDescriptor>,
    index: HashMap<FieldKey, usize>,
}

impl ResolvedFieldSet {
    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if no fields were resolved.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate descriptors in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.descriptors.iter()
    }

    /// Look up the surviving descriptor for a key.
    pub fn get(&self, key: &FieldKey) -> Option<&FieldDescriptor> {
        self.index.get(key).map(|&i| &self.descriptors[i])
    }

    /// Returns `true` if a descriptor survives under this key.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.index.contains_key(key)
    }
}

/// Resolve the field set a hydrator for `class` must handle.
///
/// Pure function of the registered class shapes: walks the chain root-to-
/// derived, enumerates each class's directly declared fields in declaration
/// order, skips statics, and accumulates by [`FieldKey`] — the last
/// insertion for a bare (non-private) key wins, while qualified (private)
/// keys are distinct per declaring class and never collide.
pub fn resolve(registry: &ClassRegistry, class: &str) -> Result<ResolvedFieldSet> {
    let chain = registry.chain(class)?;

    let mut set = ResolvedFieldSet::default();
    for (depth, class) in chain.iter().enumerate() {
        for field in class.declared_fields() {
            if field.is_static {
                continue;
            }
            let descriptor = FieldDescriptor {
                name: field.name.clone(),
                declaring_class: class.name.clone(),
                visibility: field.visibility,
                chain_depth: depth,
            };
            let key = descriptor.key();
            match set.index.get(&key) {
                Some(&i) => set.descriptors[i] = descriptor,
                None => {
                    set.index.insert(key, set.descriptors.len());
                    set.descriptors.push(descriptor);
                }
            }
        }
    }
    Ok(set)
}
