//! The class registration point.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::class::ClassDef;
use crate::error::{ModelError, Result};
use crate::instance::{Instance, SlotKey};

/// Registry of all classes known to a process.
///
/// Classes are registered once and never redefined. A parent must be
/// registered before any of its children, which makes inheritance chains
/// acyclic by construction. The registry is the single source the resolver
/// and synthesizer introspect; it is thread-safe behind a `RwLock`.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: RwLock<HashMap<String, Arc<ClassDef>>>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(HashMap::new()),
        }
    }

    /// Register a class declaration.
    ///
    /// Fails if the name is taken, the parent is unknown, or the class
    /// declares the same field name twice.
    pub fn register(&self, class: ClassDef) -> Result<()> {
        for (i, field) in class.fields.iter().enumerate() {
            if class.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ModelError::DuplicateField {
                    class: class.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        let mut classes = self
            .classes
            .write()
            .map_err(|e| ModelError::LockPoisoned(e.to_string()))?;

        if classes.contains_key(&class.name) {
            return Err(ModelError::DuplicateClass {
                name: class.name.clone(),
            });
        }
        if let Some(parent) = &class.parent {
            if !classes.contains_key(parent) {
                return Err(ModelError::UnknownClass {
                    name: parent.clone(),
                });
            }
        }

        debug!(class = %class.name, parent = ?class.parent, fields = class.fields.len(), "class registered");
        classes.insert(class.name.clone(), Arc::new(class));
        Ok(())
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Result<Arc<ClassDef>> {
        let classes = self
            .classes
            .read()
            .map_err(|e| ModelError::LockPoisoned(e.to_string()))?;
        classes
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::UnknownClass {
                name: name.to_string(),
            })
    }

    /// Returns `true` if a class with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes
            .read()
            .map(|classes| classes.contains_key(name))
            .unwrap_or(false)
    }

    /// Inheritance chain for a class: root ancestor first, the class last.
    pub fn chain(&self, name: &str) -> Result<Vec<Arc<ClassDef>>> {
        let mut chain = Vec::new();
        let mut cursor = Some(name.to_string());
        while let Some(current) = cursor {
            let class = self.get(&current)?;
            cursor = class.parent.clone();
            chain.push(class);
        }
        chain.reverse();
        Ok(chain)
    }

    /// Create an instance of a concrete class.
    ///
    /// Walks the chain root-to-derived and materializes one slot per
    /// non-static declared field: a shared slot per bare name for non-private
    /// fields (the most-derived default wins), a distinct per-class slot for
    /// each private field.
    pub fn instantiate(&self, name: &str) -> Result<Instance> {
        let target = self.get(name)?;
        if target.is_abstract {
            return Err(ModelError::AbstractClass {
                name: name.to_string(),
            });
        }
        let chain = self.chain(name)?;

        let mut slots = HashMap::new();
        for class in &chain {
            for field in class.declared_fields() {
                if field.is_static {
                    continue;
                }
                let key = if field.visibility.is_private() {
                    SlotKey::Private {
                        class: class.name.clone(),
                        name: field.name.clone(),
                    }
                } else {
                    SlotKey::Shared(field.name.clone())
                };
                slots.insert(key, field.default.clone());
            }
        }

        debug!(class = name, slots = slots.len(), "instance created");
        Ok(Instance::from_layout(name.to_string(), slots))
    }
}
