//! High-level API for Hydro.
//!
//! Composes the class registry, field resolver, and hydrator synthesizer
//! behind a single entry point: register classes, then ask the
//! [`HydratorFactory`] for a hydrator and use its `extract`/`hydrate` pair.
//!
//! ```rust
//! use hydro_model::{ClassDef, ClassRegistry, FieldDef};
//! use hydro_sdk::HydratorFactory;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ClassRegistry::new());
//! registry
//!     .register(ClassDef::new("Account").with_field(FieldDef::private("id").with_default(json!(7))))
//!     .unwrap();
//!
//! let factory = HydratorFactory::new(registry.clone());
//! let hydrator = factory.get_hydrator("Account").unwrap();
//!
//! let instance = registry.instantiate("Account").unwrap();
//! let mapping = hydrator.extract(&instance).unwrap();
//! assert_eq!(mapping.get("id").unwrap(), &json!(7));
//! ```
//!
//! # Modules
//!
//! - [`error`] — [`SdkError`]
//! - [`cache`] — [`HydratorCache`] and the in-memory implementation
//! - [`config`] — [`Configuration`] of inflector, strategy, and cache
//! - [`factory`] — [`HydratorFactory`]

pub mod cache;
pub mod config;
pub mod error;
pub mod factory;

pub use cache::{HydratorCache, InMemoryHydratorCache};
pub use config::Configuration;
pub use error::{SdkError, SdkResult};
pub use factory::HydratorFactory;

// Re-export key types so most callers need only this crate.
pub use hydro_gen::{GeneratedHydrator, Mapping};
pub use hydro_model::{AccessContext, ClassDef, ClassRegistry, FieldDef, Instance, Visibility};
