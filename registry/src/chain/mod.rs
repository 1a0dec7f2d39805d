//! Chain identifiers, deployment records, and the deployment registry.
//!
//! - [`id`]: [`ChainId`] and the catalog of named chains.
//! - [`config`]: [`Deployment`] and CAIP-2 keyed TOML (de)serialisation.
//! - [`deployments`]: the built-in deployment table.
//! - [`registry`]: [`ChainRegistry`] lookups.

pub mod config;
pub mod deployments;
pub mod id;
pub mod registry;

pub use self::config::*;
pub use self::deployments::BUILTIN;
pub use self::id::*;
pub use self::registry::*;
