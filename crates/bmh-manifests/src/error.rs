//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an inventory or producing manifests.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid node inventory")]
    Parse(#[source] serde_yaml::Error),

    /// A required key is absent (or empty). `node` is `None` for
    /// document-level keys such as `nodes`.
    #[error("{}missing required field `{field}`", node_prefix(.node))]
    MissingField {
        node: Option<NodeRef>,
        field: &'static str,
    },

    #[error("{node}: interface list is empty")]
    NoInterfaces { node: NodeRef },

    #[error("failed to serialize manifests")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Identifies the offending entry of the `nodes` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub index: usize,
    pub hostname: Option<String>,
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.hostname {
            Some(hostname) => write!(f, "node {} ({})", self.index, hostname),
            None => write!(f, "node {}", self.index),
        }
    }
}

fn node_prefix(node: &Option<NodeRef>) -> String {
    match node {
        Some(node) => format!("{node}: "),
        None => String::new(),
    }
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = GenerateError::MissingField {
            node: Some(NodeRef {
                index: 2,
                hostname: Some("node3".to_string()),
            }),
            field: "bmc.password",
        };
        assert_eq!(
            err.to_string(),
            "node 2 (node3): missing required field `bmc.password`"
        );

        let err = GenerateError::MissingField {
            node: None,
            field: "nodes",
        };
        assert_eq!(err.to_string(), "missing required field `nodes`");
    }

    #[test]
    fn test_source_is_chained_not_inlined() {
        let err = GenerateError::Io {
            path: PathBuf::from("/tmp/nodes.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/nodes.yaml");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("gone").count(), 1);
    }

    #[test]
    fn test_no_interfaces_display() {
        let err = GenerateError::NoInterfaces {
            node: NodeRef {
                index: 0,
                hostname: None,
            },
        };
        assert_eq!(err.to_string(), "node 0: interface list is empty");
    }
}
