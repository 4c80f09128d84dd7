//! Field resolution for Hydro.
//!
//! Given a registered class, the resolver walks its inheritance chain from
//! the root ancestor down to the class itself and computes the ordered,
//! de-duplicated set of instance fields a hydrator must handle:
//!
//! - static fields are excluded entirely;
//! - non-private fields are unified across the chain under their bare name
//!   (field hiding — one logical field, most-derived declaration wins);
//! - private fields are keyed by `(declaring class, name)` so a derived
//!   private never drops an ancestor's same-named private (field shadowing —
//!   two distinct storage slots).
//!
//! The output ordering is deterministic (root-to-derived, declaration order
//! within a class) but exists for reproducibility only; extraction and
//! hydration results are unordered mappings.
//!
//! # Modules
//!
//! - [`error`] — Error types for resolution
//! - [`descriptor`] — [`FieldDescriptor`] and the [`FieldKey`] accumulator key
//! - [`resolver`] — [`resolve`] and [`ResolvedFieldSet`]

pub mod descriptor;
pub mod error;
pub mod resolver;

pub use descriptor::{FieldDescriptor, FieldKey};
pub use error::{ResolveError, Result};
pub use resolver::{resolve, ResolvedFieldSet};
