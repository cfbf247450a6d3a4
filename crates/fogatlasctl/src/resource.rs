//! Resource type tokens accepted on the command line

use std::fmt;
use std::str::FromStr;

use crate::error::CtlError;

/// One of the eight kinds of resource the orchestrator manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Applications,
    Deployments,
    Microservices,
    Nodes,
    Regions,
    Relationships,
    ExternalEndpoints,
    DynamicNodes,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Applications,
        ResourceKind::Deployments,
        ResourceKind::Microservices,
        ResourceKind::Nodes,
        ResourceKind::Regions,
        ResourceKind::Relationships,
        ResourceKind::ExternalEndpoints,
        ResourceKind::DynamicNodes,
    ];

    /// Token used on the command line
    pub fn token(self) -> &'static str {
        match self {
            ResourceKind::Applications => "applications",
            ResourceKind::Deployments => "deployments",
            ResourceKind::Microservices => "microservices",
            ResourceKind::Nodes => "nodes",
            ResourceKind::Regions => "regions",
            ResourceKind::Relationships => "relationships",
            ResourceKind::ExternalEndpoints => "externalendpoints",
            ResourceKind::DynamicNodes => "dynamicnodes",
        }
    }

    /// Name used in messages
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::ExternalEndpoints => "external endpoints",
            other => other.token(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ResourceKind {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| CtlError::UnknownResource(s.to_string()))
    }
}
