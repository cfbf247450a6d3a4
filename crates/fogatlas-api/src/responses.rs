//! Response types for the API

use serde::{Deserialize, Serialize};

use crate::fields::nullable;
use crate::models::{
    Application, Deployment, DynamicNode, ExternalEndpoint, Microservice, Node, Region,
    Relationship,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationList {
    #[serde(default, deserialize_with = "nullable")]
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentList {
    #[serde(default, deserialize_with = "nullable")]
    pub deployments: Vec<Deployment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroserviceList {
    #[serde(default, deserialize_with = "nullable")]
    pub microservices: Vec<Microservice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeList {
    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionList {
    #[serde(default, deserialize_with = "nullable")]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipList {
    #[serde(default, deserialize_with = "nullable")]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalEndpointList {
    #[serde(default, deserialize_with = "nullable")]
    pub externalendpoints: Vec<ExternalEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicNodeList {
    #[serde(default, deserialize_with = "nullable")]
    pub dynamicnodes: Vec<DynamicNode>,
}

/// Body returned by mutating calls
///
/// The orchestrator reports business errors here even on a 2xx status; an
/// empty body means the call went through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Extract the message from a raw response body
    ///
    /// JSON bodies yield their `error` field, falling back to `message`;
    /// anything else is returned trimmed as-is.
    pub fn from_body(body: &str) -> String {
        let body = body.trim();
        if body.is_empty() {
            return String::new();
        }
        match serde_json::from_str::<ApiMessage>(body) {
            Ok(parsed) => parsed.error.or(parsed.message).unwrap_or_default(),
            Err(_) => body.to_string(),
        }
    }
}
