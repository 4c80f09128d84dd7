//! Default class name inflection.

use crate::traits::ClassNameInflector;

/// Separator between the user class name and the generated suffix.
const SUFFIX_MARKER: &str = "__Hydrator__";

/// Inflector that appends a BLAKE3-derived suffix to the user class name.
///
/// `Account` becomes `Account__Hydrator__<16 hex chars>`; the suffix is a
/// pure function of the class name, so the mapping is deterministic across
/// processes, and stripping the marker recovers the user class name.
#[derive(Debug, Default)]
pub struct HashedNameInflector;

impl HashedNameInflector {
    /// Create the default inflector.
    pub fn new() -> Self {
        Self
    }
}

impl ClassNameInflector for HashedNameInflector {
    fn hydrator_class_name(&self, user_class: &str) -> String {
        let digest = blake3::hash(user_class.as_bytes());
        format!(
            "{user_class}{SUFFIX_MARKER}{}",
            hex::encode(&digest.as_bytes()[..8])
        )
    }

    fn user_class_name(&self, hydrator_class: &str) -> String {
        match hydrator_class.rfind(SUFFIX_MARKER) {
            Some(i) => hydrator_class[..i].to_string(),
            None => hydrator_class.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflection_is_deterministic() {
        let inflector = HashedNameInflector::new();
        assert_eq!(
            inflector.hydrator_class_name("Account"),
            inflector.hydrator_class_name("Account")
        );
    }

    #[test]
    fn distinct_classes_get_distinct_artifacts() {
        let inflector = HashedNameInflector::new();
        assert_ne!(
            inflector.hydrator_class_name("Account"),
            inflector.hydrator_class_name("Invoice")
        );
    }

    #[test]
    fn artifact_name_round_trips() {
        let inflector = HashedNameInflector::new();
        let artifact = inflector.hydrator_class_name("Account");
        assert_eq!(inflector.user_class_name(&artifact), "Account");
    }

    #[test]
    fn user_class_name_is_identity_for_plain_names() {
        let inflector = HashedNameInflector::new();
        assert_eq!(inflector.user_class_name("Account"), "Account");
    }

    #[test]
    fn suffix_has_expected_shape() {
        let inflector = HashedNameInflector::new();
        let artifact = inflector.hydrator_class_name("Account");
        let suffix = artifact.strip_prefix("Account__Hydrator__").unwrap();
        assert_eq!(suffix.len(), 16);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
