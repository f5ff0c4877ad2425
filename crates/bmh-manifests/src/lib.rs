//! BareMetalHost manifest generator
//!
//! Converts a YAML inventory of bare-metal nodes (hostname, BMC login and
//! address, network interfaces) into the manifests a metal3 provisioning
//! operator needs: one BMC credentials Secret and one BareMetalHost per node.
//!
//! Generation is a pure function of the inventory and a [`GeneratorConfig`].
//! Nothing talks to a cluster.

pub mod config;
pub mod crds;
pub mod error;
pub mod generator;
pub mod inventory;
pub mod render;

pub use config::GeneratorConfig;
pub use crds::{BareMetalHost, BareMetalHostSpec};
pub use error::GenerateError;
pub use generator::{host_name, secret_name, ManifestGenerator, Resource};
pub use inventory::{BmcCredentials, Node, NodeInventory};
