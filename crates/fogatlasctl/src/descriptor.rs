//! Bulk descriptor consumed by `putAll`
//!
//! A YAML (or JSON) mapping holding one optional list per resource type.
//! Existing descriptors spell the dynamic node key in the singular; the
//! plural is accepted as well.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fogatlas_api::fields::nullable;
use fogatlas_api::{
    Application, Deployment, DynamicNode, ExternalEndpoint, Microservice, Node, Region,
    Relationship,
};

use crate::error::{CtlError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkDescriptor {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<Application>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub microservices: Vec<Microservice>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub externalendpoints: Vec<ExternalEndpoint>,
    #[serde(
        rename = "dynamicnode",
        alias = "dynamicnodes",
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dynamic_nodes: Vec<DynamicNode>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub deployments: Vec<Deployment>,
}

impl BulkDescriptor {
    /// Read and parse a descriptor file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid descriptor
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CtlError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CtlError::Descriptor {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a descriptor document
    ///
    /// An empty document is an empty descriptor.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Number of items across all lists
    pub fn len(&self) -> usize {
        self.applications.len()
            + self.microservices.len()
            + self.relationships.len()
            + self.nodes.len()
            + self.regions.len()
            + self.externalendpoints.len()
            + self.dynamic_nodes.len()
            + self.deployments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
