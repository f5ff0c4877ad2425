//! Manifest generation
//!
//! Turns validated nodes into one credentials Secret and one BareMetalHost
//! each. Resources come out in inventory order, each Secret directly
//! before the host that references it.

use crate::config::{GeneratorConfig, HOSTNAME_ANNOTATION, INFRA_ENV_LABEL, INSPECT_ANNOTATION};
use crate::crds::{AutomatedCleaningMode, BareMetalHost, BareMetalHostSpec, BmcDetails};
use crate::error::Result;
use crate::inventory::{Node, NodeInventory};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// A generated manifest.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Secret(Secret),
    BareMetalHost(BareMetalHost),
}

impl Resource {
    pub fn name(&self) -> Option<&str> {
        match self {
            Resource::Secret(secret) => secret.metadata.name.as_deref(),
            Resource::BareMetalHost(host) => host.metadata.name.as_deref(),
        }
    }

    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            Resource::Secret(secret) => Some(secret),
            Resource::BareMetalHost(_) => None,
        }
    }

    pub fn as_host(&self) -> Option<&BareMetalHost> {
        match self {
            Resource::BareMetalHost(host) => Some(host),
            Resource::Secret(_) => None,
        }
    }
}

/// Name of the Secret holding a node's BMC login.
pub fn secret_name(hostname: &str) -> String {
    format!("bmc-{hostname}-credentials")
}

/// Name of a node's BareMetalHost.
pub fn host_name(hostname: &str) -> String {
    format!("bmh-{hostname}")
}

/// Builds manifests for a node inventory.
#[derive(Debug, Clone, Default)]
pub struct ManifestGenerator {
    config: GeneratorConfig,
}

impl ManifestGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate two resources per node.
    ///
    /// Every node is validated before anything is built, so an error means
    /// no resources at all. Hostnames are not checked for uniqueness.
    #[instrument(skip_all, fields(infra_env = %self.config.infra_env))]
    pub fn generate(&self, inventory: &NodeInventory) -> Result<Vec<Resource>> {
        let nodes = inventory.nodes()?;

        let resources: Vec<Resource> = nodes
            .iter()
            .flat_map(|node| self.generate_node(node))
            .collect();

        info!(
            nodes = nodes.len(),
            resources = resources.len(),
            "Generated manifests"
        );
        Ok(resources)
    }

    /// The Secret and BareMetalHost for a single node, in that order.
    pub fn generate_node(&self, node: &Node) -> [Resource; 2] {
        debug!(hostname = %node.hostname, "Generating node manifests");
        [
            Resource::Secret(self.credentials_secret(node)),
            Resource::BareMetalHost(self.bare_metal_host(node)),
        ]
    }

    fn credentials_secret(&self, node: &Node) -> Secret {
        let data = BTreeMap::from([
            (
                "username".to_string(),
                ByteString(node.bmc.username.as_bytes().to_vec()),
            ),
            (
                "password".to_string(),
                ByteString(node.bmc.password.as_bytes().to_vec()),
            ),
        ]);

        Secret {
            metadata: ObjectMeta {
                name: Some(secret_name(&node.hostname)),
                namespace: Some(self.config.namespace().to_string()),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            data: Some(data),
            ..Default::default()
        }
    }

    fn bare_metal_host(&self, node: &Node) -> BareMetalHost {
        let mut host = BareMetalHost::new(
            &host_name(&node.hostname),
            BareMetalHostSpec {
                automated_cleaning_mode: AutomatedCleaningMode::Disabled,
                bmc: BmcDetails {
                    address: node.bmc.address.clone(),
                    credentials_name: secret_name(&node.hostname),
                    disable_certificate_verification: true,
                },
                boot_mac_address: node.boot_mac.to_lowercase(),
                online: false,
            },
        );

        host.metadata.namespace = Some(self.config.namespace().to_string());
        host.metadata.labels = Some(BTreeMap::from([(
            INFRA_ENV_LABEL.to_string(),
            self.config.infra_env.clone(),
        )]));
        host.metadata.annotations = Some(BTreeMap::from([
            (HOSTNAME_ANNOTATION.to_string(), node.hostname.clone()),
            (INSPECT_ANNOTATION.to_string(), "disabled".to_string()),
        ]));
        host
    }
}
