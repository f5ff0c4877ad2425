//! Node inventory
//!
//! The input document is parsed into a raw model where every key is
//! optional, then validated into typed [`Node`]s. Validation happens once,
//! here, so the generator only ever sees complete nodes.
//!
//! ```yaml
//! nodes:
//!   - hostname: node1
//!     bmc:
//!       username: admin
//!       password: pass
//!       address: redfish://10.0.0.1
//!     interfaces:
//!       - mac_address: AA:BB:CC:DD:EE:FF
//! ```

use crate::error::{GenerateError, NodeRef, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parsed, not yet validated, inventory document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NodeInventory {
    nodes: Option<Vec<RawNode>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawNode {
    hostname: Option<String>,
    bmc: Option<RawBmc>,
    interfaces: Option<Vec<RawInterface>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawBmc {
    username: Option<String>,
    password: Option<String>,
    address: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawInterface {
    mac_address: Option<String>,
}

/// A validated bare-metal node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub hostname: String,
    pub bmc: BmcCredentials,
    /// MAC address of the first interface, as written in the inventory.
    pub boot_mac: String,
}

/// Out-of-band management endpoint and its login.
#[derive(Clone, PartialEq, Eq)]
pub struct BmcCredentials {
    pub username: String,
    pub password: String,
    /// BMC endpoint URI, e.g. `redfish://10.0.0.1`.
    pub address: String,
}

impl std::fmt::Debug for BmcCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BmcCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

impl NodeInventory {
    /// Parse an inventory from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(GenerateError::Parse)
    }

    /// Read and parse an inventory file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = yaml.len(), "Read node inventory");
        Self::from_yaml_str(&yaml)
    }

    /// Validate every entry, in order. Fails on the first malformed node.
    pub fn nodes(&self) -> Result<Vec<Node>> {
        let raw = self.nodes.as_ref().ok_or(GenerateError::MissingField {
            node: None,
            field: "nodes",
        })?;

        raw.iter()
            .enumerate()
            .map(|(index, node)| node.validate(index))
            .collect()
    }
}

impl RawNode {
    fn validate(&self, index: usize) -> Result<Node> {
        let hostname = non_empty(self.hostname.as_deref());
        let node_ref = || NodeRef {
            index,
            hostname: hostname.map(str::to_string),
        };
        let missing = |field| GenerateError::MissingField {
            node: Some(node_ref()),
            field,
        };

        let hostname = hostname.ok_or_else(|| missing("hostname"))?;
        let bmc = self.bmc.as_ref().ok_or_else(|| missing("bmc"))?;
        let username = non_empty(bmc.username.as_deref()).ok_or_else(|| missing("bmc.username"))?;
        let password = non_empty(bmc.password.as_deref()).ok_or_else(|| missing("bmc.password"))?;
        let address = non_empty(bmc.address.as_deref()).ok_or_else(|| missing("bmc.address"))?;

        let interfaces = self
            .interfaces
            .as_ref()
            .ok_or_else(|| missing("interfaces"))?;
        let first = interfaces
            .first()
            .ok_or_else(|| GenerateError::NoInterfaces { node: node_ref() })?;
        let boot_mac = non_empty(first.mac_address.as_deref())
            .ok_or_else(|| missing("interfaces[0].mac_address"))?;

        Ok(Node {
            hostname: hostname.to_string(),
            bmc: BmcCredentials {
                username: username.to_string(),
                password: password.to_string(),
                address: address.to_string(),
            },
            boot_mac: boot_mac.to_string(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
