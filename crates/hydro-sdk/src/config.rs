//! Factory configuration.

use std::sync::Arc;

use hydro_gen::{ClassNameInflector, EvaluatingStrategy, GeneratorStrategy, HashedNameInflector};

use crate::cache::{HydratorCache, InMemoryHydratorCache};

/// Bundles the collaborators a [`HydratorFactory`] composes: the name
/// inflector, the generator strategy, and an optional hydrator cache.
///
/// The default wiring is the hashed inflector, the in-process evaluating
/// strategy, and an in-memory cache.
///
/// [`HydratorFactory`]: crate::factory::HydratorFactory
#[derive(Clone)]
pub struct Configuration {
    inflector: Arc<dyn ClassNameInflector>,
    strategy: Arc<dyn GeneratorStrategy>,
    cache: Option<Arc<dyn HydratorCache>>,
}

impl Configuration {
    /// Default collaborator wiring.
    pub fn new() -> Self {
        Self {
            inflector: Arc::new(HashedNameInflector::new()),
            strategy: Arc::new(EvaluatingStrategy::new()),
            cache: Some(Arc::new(InMemoryHydratorCache::new())),
        }
    }

    /// Replace the class name inflector.
    pub fn with_inflector(mut self, inflector: Arc<dyn ClassNameInflector>) -> Self {
        self.inflector = inflector;
        self
    }

    /// Replace the generator strategy.
    pub fn with_strategy(mut self, strategy: Arc<dyn GeneratorStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the hydrator cache.
    pub fn with_cache(mut self, cache: Arc<dyn HydratorCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Disable caching; every `get_hydrator` call rebuilds.
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// The configured inflector.
    pub fn inflector(&self) -> Arc<dyn ClassNameInflector> {
        self.inflector.clone()
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Arc<dyn GeneratorStrategy> {
        self.strategy.clone()
    }

    /// The configured cache, if caching is enabled.
    pub fn cache(&self) -> Option<Arc<dyn HydratorCache>> {
        self.cache.clone()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
