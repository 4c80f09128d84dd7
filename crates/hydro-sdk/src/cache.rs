//! Hydrator memoization.
//!
//! Building a hydrator is expensive (resolution, plan compilation, artifact
//! production); using one is cheap. The cache memoizes built hydrators per
//! target class so the cost is paid once per process. Correctness never
//! depends on it — every build is idempotent in effect — only performance.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use hydro_gen::GeneratedHydrator;

/// Memoizes built hydrators keyed by target class name.
pub trait HydratorCache: Send + Sync {
    /// Previously memoized hydrator for this class, if any.
    fn get(&self, class: &str) -> Option<Arc<GeneratedHydrator>>;

    /// Memoize a built hydrator for this class.
    fn put(&self, class: &str, hydrator: Arc<GeneratedHydrator>);
}

/// In-memory cache behind a `RwLock`.
///
/// A poisoned lock degrades to cache misses; the factory then rebuilds,
/// which is always safe.
#[derive(Debug, Default)]
pub struct InMemoryHydratorCache {
    entries: RwLock<HashMap<String, Arc<GeneratedHydrator>>>,
}

impl InMemoryHydratorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized hydrators.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HydratorCache for InMemoryHydratorCache {
    fn get(&self, class: &str) -> Option<Arc<GeneratedHydrator>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(class).cloned())
    }

    fn put(&self, class: &str, hydrator: Arc<GeneratedHydrator>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(class.to_string(), hydrator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_gen::AccessPlan;
    use hydro_model::{ClassDef, ClassRegistry, FieldDef};
    use hydro_resolve::resolve;

    /// Helper: a hydrator for a one-field class.
    fn test_hydrator() -> Arc<GeneratedHydrator> {
        let registry = ClassRegistry::new();
        registry
            .register(ClassDef::new("Account").with_field(FieldDef::private("id")))
            .unwrap();
        let plan = AccessPlan::compile("Account", &resolve(&registry, "Account").unwrap());
        Arc::new(GeneratedHydrator::new("AccountHydrator", plan))
    }

    #[test]
    fn miss_then_hit() {
        let cache = InMemoryHydratorCache::new();
        assert!(cache.get("Account").is_none());

        let hydrator = test_hydrator();
        cache.put("Account", hydrator.clone());

        let hit = cache.get("Account").unwrap();
        assert!(Arc::ptr_eq(&hit, &hydrator));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_overwrites() {
        let cache = InMemoryHydratorCache::new();
        cache.put("Account", test_hydrator());
        cache.put("Account", test_hydrator());
        assert_eq!(cache.len(), 1);
    }
}
