//! The hydrator synthesizer.

use std::sync::Arc;

use tracing::debug;

use hydro_model::{ClassRegistry, ModelError};
use hydro_resolve::resolve;

use crate::error::{GenError, Result};
use crate::hydrator::GeneratedHydrator;
use crate::inflector::HashedNameInflector;
use crate::plan::AccessPlan;
use crate::strategy::EvaluatingStrategy;
use crate::traits::{ClassNameInflector, GeneratorStrategy};

/// Builds [`GeneratedHydrator`]s for registered classes.
///
/// `build` is deterministic given the registry state and target class: the
/// same input always yields behaviorally identical hydrators. It is also
/// the expensive step (resolution, plan compilation, artifact production),
/// so callers are expected to memoize results per class — the synthesizer
/// itself never caches.
pub struct HydratorSynthesizer {
    inflector: Arc<dyn ClassNameInflector>,
    strategy: Arc<dyn GeneratorStrategy>,
}

impl HydratorSynthesizer {
    /// Synthesizer with the default inflector and in-process strategy.
    pub fn new() -> Self {
        Self {
            inflector: Arc::new(HashedNameInflector::new()),
            strategy: Arc::new(EvaluatingStrategy::new()),
        }
    }

    /// Replace the name inflector.
    pub fn with_inflector(mut self, inflector: Arc<dyn ClassNameInflector>) -> Self {
        self.inflector = inflector;
        self
    }

    /// Replace the generator strategy.
    pub fn with_strategy(mut self, strategy: Arc<dyn GeneratorStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build a hydrator for `class`.
    ///
    /// Fails with [`GenError::UnsupportedType`] when the class is unknown
    /// or abstract, and with whatever the strategy surfaces when artifact
    /// production fails. Safe to call repeatedly for the same class.
    pub fn build(&self, registry: &ClassRegistry, class: &str) -> Result<GeneratedHydrator> {
        let definition = registry.get(class).map_err(|e| match e {
            ModelError::UnknownClass { name } => GenError::UnsupportedType {
                class: name,
                reason: "class is not registered".to_string(),
            },
            other => GenError::UnsupportedType {
                class: class.to_string(),
                reason: other.to_string(),
            },
        })?;
        if definition.is_abstract {
            return Err(GenError::UnsupportedType {
                class: class.to_string(),
                reason: "abstract classes cannot be hydrated".to_string(),
            });
        }

        let fields = resolve(registry, class)?;
        let plan = AccessPlan::compile(class, &fields);
        let artifact = self.inflector.hydrator_class_name(class);
        debug!(class, artifact = %artifact, bindings = plan.len(), "access plan compiled");

        self.strategy.produce(&artifact, &plan)
    }
}

impl Default for HydratorSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
