//! BareMetalHost CRD
//!
//! The subset of the metal3 `BareMetalHost` custom resource that host
//! registration needs. The CRD itself is owned by the baremetal operator;
//! this type only has to serialize the same shape.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// BareMetalHost tells the provisioning operator how to reach and power
/// manage one physical server.
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "metal3.io",
    version = "v1alpha1",
    kind = "BareMetalHost",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct BareMetalHostSpec {
    /// Whether disks are wiped when the host is deprovisioned.
    pub automated_cleaning_mode: AutomatedCleaningMode,

    /// How to reach the BMC.
    pub bmc: BmcDetails,

    /// MAC address of the NIC used to PXE boot, lower-case.
    #[serde(rename = "bootMACAddress")]
    pub boot_mac_address: String,

    /// Desired power state.
    pub online: bool,
}

/// BMC endpoint and the Secret holding its login.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BmcDetails {
    /// BMC endpoint URI (`redfish://`, `ipmi://`, `idrac-virtualmedia://`, ...).
    pub address: String,

    /// Name of a Secret in the same namespace with `username` and `password` keys.
    pub credentials_name: String,

    /// Skip TLS verification when talking to the BMC.
    #[serde(default)]
    pub disable_certificate_verification: bool,
}

/// Automated cleaning mode. Generated hosts never clean.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Serialize,
    JsonSchema,
    PartialEq,
    Eq,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AutomatedCleaningMode {
    #[default]
    Disabled,
}
