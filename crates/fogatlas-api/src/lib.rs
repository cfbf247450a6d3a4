//! fogatlas-api: Shared API types for the FogAtlas REST API
//!
//! Contains the resource records, list payloads and request bodies exchanged
//! with the FogAtlas orchestrator, plus the [`Resource`] binding between a
//! record and its collection.

pub mod fields;
pub mod models;
pub mod requests;
pub mod responses;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use models::{
    Application, ApplicationMicroservice, Dataflow, Deployment, DynamicNode, ExternalEndpoint,
    Microservice, MicroserviceRequirements, Node, PriceModel, Region, RegionPrices,
    RegionRelationship, Relationship, RelationshipPrices,
};
pub use requests::{ListQuery, PatchStatus};
pub use responses::{
    ApiMessage, ApplicationList, DeploymentList, DynamicNodeList, ExternalEndpointList,
    MicroserviceList, NodeList, RegionList, RelationshipList,
};

/// A record type served under its own collection of the API
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection, e.g. `applications`
    const COLLECTION: &'static str;

    /// Payload returned when listing the collection
    type List: Serialize + DeserializeOwned + Send + 'static;
}

impl Resource for Application {
    const COLLECTION: &'static str = "applications";
    type List = ApplicationList;
}

impl Resource for Deployment {
    const COLLECTION: &'static str = "deployments";
    type List = DeploymentList;
}

impl Resource for Microservice {
    const COLLECTION: &'static str = "microservices";
    type List = MicroserviceList;
}

impl Resource for Node {
    const COLLECTION: &'static str = "nodes";
    type List = NodeList;
}

impl Resource for Region {
    const COLLECTION: &'static str = "regions";
    type List = RegionList;
}

impl Resource for Relationship {
    const COLLECTION: &'static str = "relationships";
    type List = RelationshipList;
}

impl Resource for ExternalEndpoint {
    const COLLECTION: &'static str = "externalendpoints";
    type List = ExternalEndpointList;
}

impl Resource for DynamicNode {
    const COLLECTION: &'static str = "dynamicnodes";
    type List = DynamicNodeList;
}
