//! Dynamic class model for Hydro.
//!
//! Hydrators operate on object types discovered at a registration point, not
//! on compile-time Rust structs. This crate provides that registration-time
//! type system: classes with single inheritance, declared fields carrying
//! visibility and static flags, and instances whose storage layout mirrors
//! the declarations along the inheritance chain.
//!
//! # Architecture
//!
//! - **Classes** are registered once in a [`ClassRegistry`]; a parent must be
//!   registered before its children, so inheritance chains are acyclic by
//!   construction.
//! - **Instances** hold one storage slot per declared non-static field.
//!   Non-private fields share a single slot across the chain (field hiding);
//!   private fields get a distinct slot per declaring class (field
//!   shadowing).
//! - **Normal access** through [`Instance::get`]/[`Instance::set`] enforces
//!   declared visibility against an [`AccessContext`]. The raw slot layer
//!   ([`Instance::slot`]/[`Instance::slot_mut`]) ignores visibility; it is
//!   the privileged surface generated hydrators are built on.
//!
//! # Modules
//!
//! - [`error`] — Error types for model operations
//! - [`field`] — [`Visibility`] and [`FieldDef`]
//! - [`class`] — [`ClassDef`] declarations
//! - [`registry`] — The [`ClassRegistry`] registration point
//! - [`instance`] — [`Instance`], [`SlotKey`], [`AccessContext`]

pub mod class;
pub mod error;
pub mod field;
pub mod instance;
pub mod registry;

pub use class::ClassDef;
pub use error::{ModelError, Result};
pub use field::{FieldDef, Visibility};
pub use instance::{AccessContext, Instance, SlotKey};
pub use registry::ClassRegistry;
