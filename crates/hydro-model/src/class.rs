//! Class declarations.

use serde::{Deserialize, Serialize};

use crate::field::FieldDef;

/// A class as declared at the registration point.
///
/// Carries only what this class declares directly; inherited fields are
/// reached by walking the parent chain through the registry. Classes are
/// identified by name, and a class's parent must already be registered when
/// the class itself is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Class name, unique within a registry.
    pub name: String,
    /// Parent class name, if any.
    pub parent: Option<String>,
    /// Abstract classes cannot be instantiated or hydrated.
    pub is_abstract: bool,
    /// Directly declared fields, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl ClassDef {
    /// Declare a new concrete class with no parent and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            is_abstract: false,
            fields: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append a declared field.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Mark the class abstract.
    pub fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Directly declared fields, in declaration order.
    pub fn declared_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Look up a directly declared field by name.
    pub fn declared_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Visibility;

    #[test]
    fn builder_accumulates_fields_in_order() {
        let class = ClassDef::new("Account")
            .with_field(FieldDef::private("id"))
            .with_field(FieldDef::protected("owner"))
            .with_field(FieldDef::public("label"));

        let names: Vec<&str> = class.declared_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "owner", "label"]);
    }

    #[test]
    fn parent_and_abstract_flags() {
        let class = ClassDef::new("SavingsAccount")
            .with_parent("Account")
            .mark_abstract();
        assert_eq!(class.parent.as_deref(), Some("Account"));
        assert!(class.is_abstract);
    }

    #[test]
    fn declared_field_lookup() {
        let class = ClassDef::new("Account").with_field(FieldDef::private("id"));
        assert!(class.declared_field("id").is_some());
        assert_eq!(
            class.declared_field("id").unwrap().visibility,
            Visibility::Private
        );
        assert!(class.declared_field("missing").is_none());
    }
}
