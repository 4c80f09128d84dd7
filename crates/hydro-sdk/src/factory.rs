//! The hydrator factory.

use std::sync::{Arc, Mutex};

use tracing::debug;

use hydro_gen::{GeneratedHydrator, HydratorSynthesizer};
use hydro_model::ClassRegistry;

use crate::cache::HydratorCache;
use crate::config::Configuration;
use crate::error::{SdkError, SdkResult};

/// Public entry point: composes naming, production, and caching into
/// `get_hydrator`.
///
/// The cache-miss path is serialized behind a build lock, so two threads
/// asking for the same class never produce the same artifact concurrently;
/// the second caller finds the first one's result in the cache.
pub struct HydratorFactory {
    registry: Arc<ClassRegistry>,
    synthesizer: HydratorSynthesizer,
    cache: Option<Arc<dyn HydratorCache>>,
    build_lock: Mutex<()>,
}

impl HydratorFactory {
    /// Factory with the default configuration.
    pub fn new(registry: Arc<ClassRegistry>) -> Self {
        Self::with_configuration(registry, Configuration::default())
    }

    /// Factory with explicit collaborator wiring.
    pub fn with_configuration(registry: Arc<ClassRegistry>, config: Configuration) -> Self {
        let synthesizer = HydratorSynthesizer::new()
            .with_inflector(config.inflector())
            .with_strategy(config.strategy());
        Self {
            registry,
            synthesizer,
            cache: config.cache(),
            build_lock: Mutex::new(()),
        }
    }

    /// The registry this factory introspects.
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Get (building if necessary) the hydrator for `class`.
    pub fn get_hydrator(&self, class: &str) -> SdkResult<Arc<GeneratedHydrator>> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(class) {
                return Ok(hit);
            }
        }

        let _guard = self
            .build_lock
            .lock()
            .map_err(|e| SdkError::Internal(format!("build lock poisoned: {e}")))?;

        // Another thread may have built while we waited for the lock.
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(class) {
                return Ok(hit);
            }
        }

        debug!(class, "hydrator cache miss, building");
        let hydrator = Arc::new(self.synthesizer.build(&self.registry, class)?);
        if let Some(cache) = &self.cache {
            cache.put(class, hydrator.clone());
        }
        Ok(hydrator)
    }
}
