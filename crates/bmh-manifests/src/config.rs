//! Generator configuration
//!
//! Values that are constant for a whole run. The binary builds these from
//! defaults; library callers may override them.

/// Label key grouping hosts into an agent-install infra-env.
pub const INFRA_ENV_LABEL: &str = "infraenvs.agent-install.openshift.io";

/// Annotation carrying the hostname the agent should report.
pub const HOSTNAME_ANNOTATION: &str = "bmac.agent-install.openshift.io/hostname";

/// Annotation controlling metal3 hardware inspection.
pub const INSPECT_ANNOTATION: &str = "inspect.metal3.io";

/// Configuration for manifest generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Infra-env name. Used as the namespace of every resource and as the
    /// value of the infra-env label on each host.
    pub infra_env: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            infra_env: "openshift".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given infra-env.
    pub fn new(infra_env: impl Into<String>) -> Self {
        Self {
            infra_env: infra_env.into(),
        }
    }

    /// Namespace all generated resources are placed in.
    pub fn namespace(&self) -> &str {
        &self.infra_env
    }
}
