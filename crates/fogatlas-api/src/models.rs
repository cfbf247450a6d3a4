//! Resource records managed by the FogAtlas orchestrator
//!
//! Every field defaults when absent or `null` so partially filled documents
//! decode, and fields left at their default are omitted when writing. Top-level
//! records keep unknown fields in `extra` and write them back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::{is_default, nullable};

/// An application composed of microservices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub microservices: Vec<ApplicationMicroservice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference from an application to one of its microservices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationMicroservice {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub microservice_id: String,
}

/// A deployment request, addressed by name rather than id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub externalendpoint_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub microservices: Vec<MicroserviceRequirements>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub dataflows: Vec<Dataflow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Placement requirements of a single microservice inside a deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroserviceRequirements {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub cpu_required: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub memory_required: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub disk_required: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_required: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub price_required: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub price_computed: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub deployment_descriptor: String,
}

/// Network requirements between two microservices of a deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataflow {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub source_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub destination_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub bandwidth_required: i64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub latency_required: i64,
}

/// A microservice placed on a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Microservice {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub application_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub node_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A compute node and its capacity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub architecture: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub distribution: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub cpu_capacity: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub cpu_available: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub memory_capacity: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub memory_available: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub disk_capacity: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub disk_available: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A geographical region grouping nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub tier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<RegionPrices>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RegionRelationship>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resource prices charged inside a region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionPrices {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub cpu: PriceModel,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub memory: PriceModel,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub disk: PriceModel,
}

/// Reference from a region to one of its relationships
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionRelationship {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub relationship_id: String,
}

/// Scarcity-based price of a single resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceModel {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub min_price: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub max_price: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub scarcity: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub unit_price: f64,
}

/// A network link between two endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub endpoint_a: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub endpoint_b: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub bandwidth_capacity: i64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub bandwidth_available: i64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub latency: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<RelationshipPrices>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Prices charged on a relationship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipPrices {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub bandwidth: PriceModel,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_default")]
    pub latency: PriceModel,
}

/// A thing or service outside the cluster that deployments talk to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalEndpoint {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(
        rename = "type",
        deserialize_with = "nullable",
        skip_serializing_if = "String::is_empty"
    )]
    pub endpoint_type: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node whose address is assigned at runtime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicNode {
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub node_id: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub region_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_record_decodes() {
        let node: Node = serde_json::from_value(json!({ "id": "n1" })).unwrap();
        assert_eq!(node.id, "n1");
        assert!(node.status.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive() {
        let body = json!({
            "id": "ee1",
            "type": "camera",
            "owner": { "team": "edge" }
        });
        let endpoint: ExternalEndpoint = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(endpoint.endpoint_type, "camera");
        assert_eq!(endpoint.extra["owner"]["team"], "edge");

        assert_eq!(serde_json::to_value(&endpoint).unwrap(), body);
    }

    #[test]
    fn test_region_without_prices() {
        let region: Region = serde_json::from_value(json!({ "id": "r1", "tier": 2 })).unwrap();
        assert_eq!(region.tier, 2);
        assert!(region.prices.is_none());
        let written = serde_json::to_value(&region).unwrap();
        assert!(written.get("prices").is_none());
    }

    #[test]
    fn test_partial_record_is_written_unchanged() {
        let body = json!({ "name": "d1" });
        let deployment: Deployment = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&deployment).unwrap(), body);

        let body = json!({
            "name": "d1",
            "microservices": [{ "name": "ms1", "cpu_required": "500m" }],
            "dataflows": [{ "source_id": "ms1", "destination_id": "cam1", "latency_required": 20 }]
        });
        let deployment: Deployment = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&deployment).unwrap(), body);
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let app: Application =
            serde_json::from_value(json!({ "id": "a1", "description": null })).unwrap();
        assert_eq!(app.id, "a1");
        assert!(app.description.is_empty());

        let deployment: Deployment = serde_json::from_value(json!({
            "name": "d1",
            "dataflows": null,
            "microservices": [{ "name": "ms1", "price_required": null }]
        }))
        .unwrap();
        assert!(deployment.dataflows.is_empty());
        assert_eq!(deployment.microservices[0].price_required, 0.0);

        let region: Region =
            serde_json::from_value(json!({ "id": "r1", "tier": null, "prices": null })).unwrap();
        assert_eq!(region.tier, 0);
        assert!(region.prices.is_none());
    }

    #[test]
    fn test_region_prices_keep_only_given_models() {
        let body = json!({
            "id": "r1",
            "prices": { "cpu": { "min_price": 0.5, "max_price": 2.0, "unit_price": 1.0 } }
        });
        let region: Region = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(region.prices.as_ref().unwrap().cpu.max_price, 2.0);
        assert_eq!(serde_json::to_value(&region).unwrap(), body);
    }
}
