//! Instances and their raw storage slots.
//!
//! An [`Instance`] owns one slot per non-static field declared along its
//! class's inheritance chain. Two access layers exist:
//!
//! - [`Instance::get`]/[`Instance::set`] resolve a bare field name against
//!   the chain and enforce declared visibility for an [`AccessContext`].
//!   This is the "normal" surface ordinary callers see.
//! - [`Instance::slot`]/[`Instance::slot_mut`] address storage directly by
//!   [`SlotKey`], ignoring visibility. Generated hydrators are compiled
//!   against this layer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::field::Visibility;
use crate::registry::ClassRegistry;

/// Raw storage address of one field slot inside an instance.
///
/// Non-private fields share one slot per bare name across the whole chain
/// (field hiding). Private fields get a distinct slot per declaring class
/// (field shadowing), so a derived private never clobbers an ancestor's.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKey {
    /// Single slot shared by all non-private declarations of this name.
    Shared(String),
    /// Distinct slot owned by one class's private declaration.
    Private { class: String, name: String },
}

impl SlotKey {
    /// Bare field name this slot stores.
    pub fn field_name(&self) -> &str {
        match self {
            Self::Shared(name) => name,
            Self::Private { name, .. } => name,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared(name) => write!(f, "{name}"),
            Self::Private { class, name } => write!(f, "{class}::{name}"),
        }
    }
}

/// Where a normal field access originates from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessContext {
    /// Outside any class (application code).
    External,
    /// Inside a method of the named class.
    Within(String),
}

impl AccessContext {
    /// Context for code running inside the named class.
    pub fn within(class: impl Into<String>) -> Self {
        Self::Within(class.into())
    }
}

impl fmt::Display for AccessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => write!(f, "external scope"),
            Self::Within(class) => write!(f, "class {class}"),
        }
    }
}

/// A live object of a registered class.
///
/// Created through [`ClassRegistry::instantiate`], which materializes one
/// slot per non-static field along the chain, initialized to each field's
/// declared default.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    class: String,
    slots: HashMap<SlotKey, Value>,
}

impl Instance {
    pub(crate) fn from_layout(class: String, slots: HashMap<SlotKey, Value>) -> Self {
        Self { class, slots }
    }

    /// Name of the class this instance belongs to.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Number of storage slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Raw read of a slot, ignoring visibility.
    ///
    /// Returns `None` if the slot does not exist on this instance's layout.
    pub fn slot(&self, key: &SlotKey) -> Option<&Value> {
        self.slots.get(key)
    }

    /// Raw write access to a slot, ignoring visibility.
    pub fn slot_mut(&mut self, key: &SlotKey) -> Option<&mut Value> {
        self.slots.get_mut(key)
    }

    /// Read a field by bare name, enforcing visibility.
    ///
    /// Resolution walks the chain most-derived first. A private declaration
    /// only matches when the access originates from inside its declaring
    /// class; otherwise the walk continues upward, so an ancestor's
    /// same-named accessible field can still resolve (shadowing).
    pub fn get(&self, registry: &ClassRegistry, field: &str, ctx: &AccessContext) -> Result<&Value> {
        let key = self.resolve_visible(registry, field, ctx)?;
        self.slots
            .get(&key)
            .ok_or_else(|| ModelError::UnknownField {
                class: self.class.clone(),
                field: field.to_string(),
            })
    }

    /// Write a field by bare name, enforcing visibility.
    pub fn set(
        &mut self,
        registry: &ClassRegistry,
        field: &str,
        ctx: &AccessContext,
        value: Value,
    ) -> Result<()> {
        let key = self.resolve_visible(registry, field, ctx)?;
        match self.slots.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ModelError::UnknownField {
                class: self.class.clone(),
                field: field.to_string(),
            }),
        }
    }

    /// Resolve a bare name to the slot the given context may touch.
    fn resolve_visible(
        &self,
        registry: &ClassRegistry,
        field: &str,
        ctx: &AccessContext,
    ) -> Result<SlotKey> {
        let chain = registry.chain(&self.class)?;
        let in_chain = |name: &str| chain.iter().any(|c| c.name == name);

        let mut denied: Option<ModelError> = None;

        // Most-derived declaration first.
        for class in chain.iter().rev() {
            let Some(decl) = class.declared_field(field) else {
                continue;
            };
            if decl.is_static {
                return Err(ModelError::StaticField {
                    class: class.name.clone(),
                    field: field.to_string(),
                });
            }
            match decl.visibility {
                Visibility::Public => return Ok(SlotKey::Shared(field.to_string())),
                Visibility::Protected => {
                    if matches!(ctx, AccessContext::Within(c) if in_chain(c)) {
                        return Ok(SlotKey::Shared(field.to_string()));
                    }
                    return Err(ModelError::VisibilityDenied {
                        class: class.name.clone(),
                        field: field.to_string(),
                        context: ctx.to_string(),
                    });
                }
                Visibility::Private => {
                    if matches!(ctx, AccessContext::Within(c) if c == &class.name) {
                        return Ok(SlotKey::Private {
                            class: class.name.clone(),
                            name: field.to_string(),
                        });
                    }
                    // Shadowed: an ancestor may still declare an accessible
                    // field of this name. Remember the denial and keep going.
                    if denied.is_none() {
                        denied = Some(ModelError::VisibilityDenied {
                            class: class.name.clone(),
                            field: field.to_string(),
                            context: ctx.to_string(),
                        });
                    }
                }
            }
        }

        Err(denied.unwrap_or_else(|| ModelError::UnknownField {
            class: self.class.clone(),
            field: field.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassDef;
    use crate::field::FieldDef;
    use serde_json::json;

    /// Helper: registry with a Base <- Derived chain exercising all
    /// visibility levels.
    fn test_registry() -> ClassRegistry {
        let registry = ClassRegistry::new();
        registry
            .register(
                ClassDef::new("Base")
                    .with_field(FieldDef::public("label").with_default(json!("base")))
                    .with_field(FieldDef::protected("owner"))
                    .with_field(FieldDef::private("secret").with_default(json!("base-secret"))),
            )
            .unwrap();
        registry
            .register(
                ClassDef::new("Derived")
                    .with_parent("Base")
                    .with_field(FieldDef::private("secret").with_default(json!("derived-secret"))),
            )
            .unwrap();
        registry
    }

    #[test]
    fn public_field_readable_externally() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();
        let value = instance
            .get(&registry, "label", &AccessContext::External)
            .unwrap();
        assert_eq!(value, &json!("base"));
    }

    #[test]
    fn protected_field_denied_externally() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();
        let err = instance
            .get(&registry, "owner", &AccessContext::External)
            .unwrap_err();
        assert!(matches!(err, ModelError::VisibilityDenied { .. }));
    }

    #[test]
    fn protected_field_readable_from_descendant() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();
        let value = instance
            .get(&registry, "owner", &AccessContext::within("Derived"))
            .unwrap();
        assert_eq!(value, &Value::Null);
    }

    #[test]
    fn private_field_resolves_per_declaring_class() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();

        let from_derived = instance
            .get(&registry, "secret", &AccessContext::within("Derived"))
            .unwrap();
        assert_eq!(from_derived, &json!("derived-secret"));

        // From inside Base, the shadowed ancestor slot resolves instead.
        let from_base = instance
            .get(&registry, "secret", &AccessContext::within("Base"))
            .unwrap();
        assert_eq!(from_base, &json!("base-secret"));
    }

    #[test]
    fn private_field_denied_externally() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();
        let err = instance
            .get(&registry, "secret", &AccessContext::External)
            .unwrap_err();
        assert!(matches!(err, ModelError::VisibilityDenied { .. }));
    }

    #[test]
    fn set_respects_visibility() {
        let registry = test_registry();
        let mut instance = registry.instantiate("Derived").unwrap();

        instance
            .set(
                &registry,
                "label",
                &AccessContext::External,
                json!("renamed"),
            )
            .unwrap();
        assert_eq!(
            instance
                .get(&registry, "label", &AccessContext::External)
                .unwrap(),
            &json!("renamed")
        );

        let err = instance
            .set(&registry, "secret", &AccessContext::External, json!("x"))
            .unwrap_err();
        assert!(matches!(err, ModelError::VisibilityDenied { .. }));
    }

    #[test]
    fn shadowed_private_slots_are_independent() {
        let registry = test_registry();
        let mut instance = registry.instantiate("Derived").unwrap();

        instance
            .set(
                &registry,
                "secret",
                &AccessContext::within("Base"),
                json!("changed-in-base"),
            )
            .unwrap();

        // Derived's slot is untouched.
        assert_eq!(
            instance
                .get(&registry, "secret", &AccessContext::within("Derived"))
                .unwrap(),
            &json!("derived-secret")
        );
    }

    #[test]
    fn unknown_field_is_reported() {
        let registry = test_registry();
        let instance = registry.instantiate("Derived").unwrap();
        let err = instance
            .get(&registry, "nope", &AccessContext::External)
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownField { .. }));
    }

    #[test]
    fn raw_slot_access_ignores_visibility() {
        let registry = test_registry();
        let mut instance = registry.instantiate("Derived").unwrap();

        let key = SlotKey::Private {
            class: "Base".into(),
            name: "secret".into(),
        };
        assert_eq!(instance.slot(&key).unwrap(), &json!("base-secret"));

        *instance.slot_mut(&key).unwrap() = json!("overwritten");
        assert_eq!(instance.slot(&key).unwrap(), &json!("overwritten"));
    }

    #[test]
    fn slot_key_display() {
        assert_eq!(SlotKey::Shared("label".into()).to_string(), "label");
        assert_eq!(
            SlotKey::Private {
                class: "Base".into(),
                name: "secret".into()
            }
            .to_string(),
            "Base::secret"
        );
    }

    #[test]
    fn static_field_has_no_instance_access() {
        let registry = ClassRegistry::new();
        registry
            .register(
                ClassDef::new("Counted")
                    .with_field(FieldDef::public("instances").into_static())
                    .with_field(FieldDef::public("name")),
            )
            .unwrap();
        let instance = registry.instantiate("Counted").unwrap();

        let err = instance
            .get(&registry, "instances", &AccessContext::External)
            .unwrap_err();
        assert!(matches!(err, ModelError::StaticField { .. }));
        assert_eq!(instance.slot_count(), 1);
    }
}
