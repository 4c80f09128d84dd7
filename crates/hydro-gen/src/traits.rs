//! Collaborator traits the synthesizer delegates to.
//!
//! Both traits are object-safe and `Send + Sync` so implementations can be
//! shared behind `Arc<dyn _>` and swapped without touching resolver or
//! synthesizer behavior.

use crate::error::Result;
use crate::hydrator::GeneratedHydrator;
use crate::plan::AccessPlan;

/// Maps between user class names and generated artifact names.
///
/// Both directions must be total and deterministic for the lifetime of a
/// process: the same user class always yields the same artifact name, and
/// the artifact name round-trips back to the user class.
pub trait ClassNameInflector: Send + Sync {
    /// Artifact name to generate for a user class.
    fn hydrator_class_name(&self, user_class: &str) -> String;

    /// Original user class name for a generated artifact name.
    fn user_class_name(&self, hydrator_class: &str) -> String;
}

/// Turns a compiled plan into an invocable hydrator artifact.
///
/// This is the "code production and loading" seam: an implementation may
/// materialize the artifact in-process, write it to disk and reload it, or
/// anything in between. Producing an artifact name that is already loaded
/// with a *different* plan is a collision and must fail; reproducing the
/// same `(name, plan)` pair is idempotent.
pub trait GeneratorStrategy: Send + Sync {
    /// Produce the invocable artifact for `plan` under `artifact_name`.
    fn produce(&self, artifact_name: &str, plan: &AccessPlan) -> Result<GeneratedHydrator>;
}
