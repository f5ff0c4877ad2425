//! Custom Resource Definitions
//!
//! Third-party CRD types emitted by the generator.

pub mod bare_metal_host;

pub use bare_metal_host::{AutomatedCleaningMode, BareMetalHost, BareMetalHostSpec, BmcDetails};
