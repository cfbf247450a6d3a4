//! Error types for fogatlasctl

use std::path::PathBuf;

use fogatlas_client::ClientError;
use thiserror::Error;

/// Errors that abort a command
#[derive(Error, Debug)]
pub enum CtlError {
    /// Resource token not known to the command
    #[error("resource specified ({0}) is unknown")]
    UnknownResource(String),

    /// A single required option was left empty
    #[error("option {0} is required")]
    MissingOption(&'static str),

    /// Several required options, at least one left empty
    #[error("options {} are required", .0.join(" and "))]
    MissingOptions(&'static [&'static str]),

    /// Input file could not be read
    #[error("unable to read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resource file is not valid JSON for the resource
    #[error("wrong file format: {0}")]
    FileFormat(#[from] serde_json::Error),

    /// Bulk descriptor is not valid YAML/JSON
    #[error("unable to parse descriptor {}: {source}", .path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Call to the orchestrator failed
    #[error("{action} {resource} failed: {source}")]
    Remote {
        action: &'static str,
        resource: &'static str,
        #[source]
        source: ClientError,
    },

    /// Writing command output failed
    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CtlError {
    /// Wrap a client error with the action and resource that failed
    pub fn remote(
        action: &'static str,
        resource: &'static str,
    ) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Remote {
            action,
            resource,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource_display() {
        let err = CtlError::UnknownResource("gateways".to_string());
        assert_eq!(err.to_string(), "resource specified (gateways) is unknown");
    }

    #[test]
    fn test_missing_options_display() {
        let err = CtlError::MissingOptions(&["--id", "--file"]);
        assert_eq!(err.to_string(), "options --id and --file are required");
        let err = CtlError::MissingOption("--id");
        assert_eq!(err.to_string(), "option --id is required");
    }

    #[test]
    fn test_remote_display() {
        let err = CtlError::remote("get", "nodes")(ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "get nodes failed: API error (500): boom");
    }
}
