//! The generated operation pair.

use serde_json::Value;

use hydro_model::Instance;

use crate::error::{GenError, Result};
use crate::plan::AccessPlan;

/// Flat mapping exchanged with extract/hydrate.
///
/// Keys follow the compiled exposed-key policy; values are plain JSON
/// values copied by value. Callers must not depend on iteration order.
pub type Mapping = serde_json::Map<String, Value>;

/// A stateless extract/hydrate pair bound to exactly one target class.
///
/// Owns no instance data — only the compiled [`AccessPlan`]. Built once per
/// target class (synthesis is the expensive step) and reused for unboundedly
/// many instances; the value is immutable and `Send + Sync`, so concurrent
/// use on different instances is free.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedHydrator {
    artifact: String,
    plan: AccessPlan,
}

impl GeneratedHydrator {
    /// Bind a compiled plan under its generated artifact name.
    pub fn new(artifact: impl Into<String>, plan: AccessPlan) -> Self {
        Self {
            artifact: artifact.into(),
            plan,
        }
    }

    /// Name of the generated artifact.
    pub fn artifact_name(&self) -> &str {
        &self.artifact
    }

    /// The class this hydrator targets.
    pub fn target_class(&self) -> &str {
        &self.plan.class
    }

    /// The compiled access plan.
    pub fn plan(&self) -> &AccessPlan {
        &self.plan
    }

    /// Read every planned field off `instance` into a flat mapping.
    ///
    /// Reflects the instance state at the moment of the call; nothing is
    /// cached across calls. A binding whose slot is missing on the instance
    /// (an instance of a different class, or a layout from a foreign
    /// registry) fails the whole call — no partial output is returned.
    pub fn extract(&self, instance: &Instance) -> Result<Mapping> {
        let mut mapping = Mapping::new();
        for binding in &self.plan.bindings {
            let value = instance
                .slot(&binding.slot)
                .ok_or_else(|| GenError::FieldAccess {
                    field: binding.exposed.clone(),
                    reason: format!(
                        "no slot {} on instance of class {}",
                        binding.slot,
                        instance.class_name()
                    ),
                })?;
            mapping.insert(binding.exposed.clone(), value.clone());
        }
        Ok(mapping)
    }

    /// Write mapping entries into `instance`, field by planned field.
    ///
    /// Partial update semantics: a field whose exposed key is absent from
    /// the mapping is left untouched; an entry holding an explicit `null`
    /// is written (null is a value, distinct from omission). Entries that
    /// match no binding are ignored. Returns the same instance reference
    /// for chaining.
    ///
    /// All touched slots are checked before any write, so a failing call
    /// leaves the instance unmodified.
    pub fn hydrate<'a>(
        &self,
        mapping: &Mapping,
        instance: &'a mut Instance,
    ) -> Result<&'a mut Instance> {
        let mut writes = Vec::with_capacity(self.plan.bindings.len());
        for binding in &self.plan.bindings {
            let Some(value) = mapping.get(&binding.exposed) else {
                continue;
            };
            if instance.slot(&binding.slot).is_none() {
                return Err(GenError::FieldAccess {
                    field: binding.exposed.clone(),
                    reason: format!(
                        "no slot {} on instance of class {}",
                        binding.slot,
                        instance.class_name()
                    ),
                });
            }
            writes.push((&binding.slot, value.clone()));
        }

        for (slot, value) in writes {
            // Checked above; the instance cannot change between the passes.
            if let Some(target) = instance.slot_mut(slot) {
                *target = value;
            }
        }
        Ok(instance)
    }
}
