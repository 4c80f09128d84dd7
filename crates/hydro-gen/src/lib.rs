//! Hydrator synthesis for Hydro.
//!
//! Consumes the field set computed by `hydro-resolve` and produces a
//! [`GeneratedHydrator`]: a stateless operation pair bound to one target
//! class that can read every resolved field into a flat mapping
//! ([`GeneratedHydrator::extract`]) and write a flat mapping back into the
//! fields ([`GeneratedHydrator::hydrate`]), reaching the raw slot layer
//! underneath visibility enforcement.
//!
//! Synthesis is split the way the original architecture splits it:
//!
//! - the [`HydratorSynthesizer`] compiles an [`AccessPlan`] and names the
//!   artifact through a [`ClassNameInflector`];
//! - a [`GeneratorStrategy`] turns the plan into the invocable artifact —
//!   in-process ([`EvaluatingStrategy`]) or through a file round-trip
//!   ([`FileWriterStrategy`]).
//!
//! # Modules
//!
//! - [`error`] — [`GenError`] taxonomy
//! - [`plan`] — [`AccessPlan`] and [`FieldBinding`]
//! - [`hydrator`] — [`GeneratedHydrator`] and the extract/hydrate operations
//! - [`traits`] — Collaborator traits
//! - [`inflector`] — Default [`HashedNameInflector`]
//! - [`strategy`] — Default generator strategies
//! - [`synthesizer`] — [`HydratorSynthesizer`]

pub mod error;
pub mod hydrator;
pub mod inflector;
pub mod plan;
pub mod strategy;
pub mod synthesizer;
pub mod traits;

pub use error::{GenError, Result};
pub use hydrator::{GeneratedHydrator, Mapping};
pub use inflector::HashedNameInflector;
pub use plan::{AccessPlan, FieldBinding};
pub use strategy::{EvaluatingStrategy, FileWriterStrategy};
pub use synthesizer::HydratorSynthesizer;
pub use traits::{ClassNameInflector, GeneratorStrategy};
