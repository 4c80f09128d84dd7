//! Default generator strategies.
//!
//! Loading an artifact is the one side effect of synthesis: a name can be
//! bound to at most one plan per strategy. Binding the same name to the
//! same plan again is idempotent; binding it to a different plan is a
//! collision surfaced as [`GenError::Generation`].

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{GenError, Result};
use crate::hydrator::GeneratedHydrator;
use crate::plan::AccessPlan;
use crate::traits::GeneratorStrategy;

/// In-process strategy: materializes the hydrator immediately.
///
/// Keeps a table of artifact names loaded through it, standing in for the
/// process-wide "generated code already evaluated" namespace.
#[derive(Debug, Default)]
pub struct EvaluatingStrategy {
    loaded: RwLock<HashMap<String, AccessPlan>>,
}

impl EvaluatingStrategy {
    /// Create a strategy with an empty artifact namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an artifact with this name has been loaded.
    pub fn is_loaded(&self, artifact_name: &str) -> bool {
        self.loaded
            .read()
            .map(|loaded| loaded.contains_key(artifact_name))
            .unwrap_or(false)
    }
}

impl GeneratorStrategy for EvaluatingStrategy {
    fn produce(&self, artifact_name: &str, plan: &AccessPlan) -> Result<GeneratedHydrator> {
        let mut loaded = self.loaded.write().map_err(|e| GenError::Generation {
            artifact: artifact_name.to_string(),
            reason: format!("artifact table poisoned: {e}"),
        })?;

        match loaded.get(artifact_name) {
            Some(existing) if existing == plan => {}
            Some(_) => {
                return Err(GenError::Generation {
                    artifact: artifact_name.to_string(),
                    reason: "artifact name already bound to a different plan".to_string(),
                });
            }
            None => {
                debug!(artifact = artifact_name, bindings = plan.len(), "artifact loaded in-process");
                loaded.insert(artifact_name.to_string(), plan.clone());
            }
        }

        Ok(GeneratedHydrator::new(artifact_name, plan.clone()))
    }
}

/// File-backed strategy: writes the plan as JSON, reloads it, and
/// materializes the hydrator from what was read back.
///
/// The written file (`<artifact>.hydrator.json`) doubles as an on-disk
/// cache a later process can pick up. Any I/O or serialization failure
/// surfaces as [`GenError::Generation`].
#[derive(Debug)]
pub struct FileWriterStrategy {
    directory: PathBuf,
}

impl FileWriterStrategy {
    /// Create a strategy writing artifacts under `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Path the artifact for `artifact_name` is written to.
    pub fn artifact_path(&self, artifact_name: &str) -> PathBuf {
        self.directory.join(format!("{artifact_name}.hydrator.json"))
    }

    fn generation_error(&self, artifact_name: &str, reason: impl std::fmt::Display) -> GenError {
        GenError::Generation {
            artifact: artifact_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl GeneratorStrategy for FileWriterStrategy {
    fn produce(&self, artifact_name: &str, plan: &AccessPlan) -> Result<GeneratedHydrator> {
        let path = self.artifact_path(artifact_name);

        if path.exists() {
            let existing = fs::read_to_string(&path)
                .map_err(|e| self.generation_error(artifact_name, e))?;
            let existing: AccessPlan = serde_json::from_str(&existing)
                .map_err(|e| self.generation_error(artifact_name, e))?;
            if &existing != plan {
                return Err(self.generation_error(
                    artifact_name,
                    "artifact file already holds a different plan",
                ));
            }
            return Ok(GeneratedHydrator::new(artifact_name, existing));
        }

        fs::create_dir_all(&self.directory)
            .map_err(|e| self.generation_error(artifact_name, e))?;
        let serialized = serde_json::to_string_pretty(plan)
            .map_err(|e| self.generation_error(artifact_name, e))?;
        fs::write(&path, serialized).map_err(|e| self.generation_error(artifact_name, e))?;
        debug!(artifact = artifact_name, path = %path.display(), "artifact written");

        // Reload from disk so the produced hydrator reflects exactly what
        // a later process would load.
        let reloaded = fs::read_to_string(&path)
            .map_err(|e| self.generation_error(artifact_name, e))?;
        let reloaded: AccessPlan = serde_json::from_str(&reloaded)
            .map_err(|e| self.generation_error(artifact_name, e))?;
        Ok(GeneratedHydrator::new(artifact_name, reloaded))
    }
}
