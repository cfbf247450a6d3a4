//! Table rendering of API responses
//!
//! Every response shape the get command can produce is a [`Response`]
//! variant, and every variant's payload knows how to draw itself.

use std::io::{self, Write};

use comfy_table::Table;

use fogatlas_api::{
    Application, ApplicationList, Deployment, DeploymentList, DynamicNode, DynamicNodeList,
    ExternalEndpoint, ExternalEndpointList, Microservice, MicroserviceList, Node, NodeList,
    PriceModel, Region, RegionList, Relationship, RelationshipList,
};

/// Types that can be written as human-readable tables
pub trait Render {
    /// Write the value as one or more tables
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

/// A decoded get response, tagged by resource and cardinality
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Applications(ApplicationList),
    Application(Application),
    Deployments(DeploymentList),
    Deployment(Deployment),
    Microservices(MicroserviceList),
    Microservice(Microservice),
    Nodes(NodeList),
    Node(Node),
    Regions(RegionList),
    Region(Region),
    Relationships(RelationshipList),
    Relationship(Relationship),
    ExternalEndpoints(ExternalEndpointList),
    ExternalEndpoint(ExternalEndpoint),
    DynamicNodes(DynamicNodeList),
    DynamicNode(DynamicNode),
}

impl Render for Response {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Response::Applications(list) => list.render(writer),
            Response::Application(item) => item.render(writer),
            Response::Deployments(list) => list.render(writer),
            Response::Deployment(item) => item.render(writer),
            Response::Microservices(list) => list.render(writer),
            Response::Microservice(item) => item.render(writer),
            Response::Nodes(list) => list.render(writer),
            Response::Node(item) => item.render(writer),
            Response::Regions(list) => list.render(writer),
            Response::Region(item) => item.render(writer),
            Response::Relationships(list) => list.render(writer),
            Response::Relationship(item) => item.render(writer),
            Response::ExternalEndpoints(list) => list.render(writer),
            Response::ExternalEndpoint(item) => item.render(writer),
            Response::DynamicNodes(list) => list.render(writer),
            Response::DynamicNode(item) => item.render(writer),
        }
    }
}

fn write_table<W: Write>(
    writer: &mut W,
    header: &[&str],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> io::Result<()> {
    let mut table = Table::new();
    table.set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    writeln!(writer, "{table}")
}

/// `min,max,scarcity,unit`, or empty when the price model is missing
fn price_cell(price: Option<&PriceModel>) -> String {
    price.map_or_else(String::new, |p| {
        format!(
            "{:.2},{:.2},{:.2},{:.2}",
            p.min_price, p.max_price, p.scarcity, p.unit_price
        )
    })
}

// Applications

const APPLICATION_HEADER: &[&str] = &["ID", "Name", "Description", "Status", "Microservice Id"];

fn application_row(app: &Application) -> Vec<String> {
    let microservice_ids = app
        .microservices
        .iter()
        .map(|ms| ms.microservice_id.as_str())
        .collect::<Vec<_>>()
        .join(",");
    vec![
        app.id.clone(),
        app.name.clone(),
        app.description.clone(),
        app.status.clone(),
        microservice_ids,
    ]
}

impl Render for Application {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, APPLICATION_HEADER, [application_row(self)])
    }
}

impl Render for ApplicationList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(
            writer,
            APPLICATION_HEADER,
            self.applications.iter().map(application_row),
        )
    }
}

// Deployments

const DEPLOYMENT_HEADER: &[&str] = &["Name", "Description", "Status", "ExternalEndpointID"];

const REQUIREMENTS_HEADER: &[&str] = &[
    "Depl. Name",
    "Name",
    "Description",
    "CPURequired",
    "MemoryRequired",
    "DiskRequired",
    "RegionID",
    "RegionRequired",
    "PriceRequired",
    "PriceComputed",
    "Deployment Descriptor",
];

const DATAFLOW_HEADER: &[&str] = &[
    "Depl. Name",
    "SourceID",
    "DestinationID",
    "BandwidthRequired",
    "LatencyRequired",
];

/// Deployments get a summary table followed by their microservice
/// requirements and dataflows, each row tagged with the deployment name
fn write_deployments<'a, W: Write>(
    writer: &mut W,
    deployments: impl IntoIterator<Item = &'a Deployment> + Clone,
) -> io::Result<()> {
    write_table(
        writer,
        DEPLOYMENT_HEADER,
        deployments.clone().into_iter().map(|depl| {
            vec![
                depl.name.clone(),
                depl.description.clone(),
                depl.status.clone(),
                depl.externalendpoint_id.clone(),
            ]
        }),
    )?;

    writeln!(writer, "Microservices Requirements")?;
    write_table(
        writer,
        REQUIREMENTS_HEADER,
        deployments.clone().into_iter().flat_map(|depl| {
            depl.microservices.iter().map(move |ms| {
                vec![
                    depl.name.clone(),
                    ms.name.clone(),
                    ms.description.clone(),
                    ms.cpu_required.clone(),
                    ms.memory_required.clone(),
                    ms.disk_required.clone(),
                    ms.region_id.clone(),
                    ms.region_required.clone(),
                    format!("{:.2}", ms.price_required),
                    format!("{:.2}", ms.price_computed),
                    ms.deployment_descriptor.clone(),
                ]
            })
        }),
    )?;

    writeln!(writer, "Dataflows")?;
    write_table(
        writer,
        DATAFLOW_HEADER,
        deployments.into_iter().flat_map(|depl| {
            depl.dataflows.iter().map(move |df| {
                vec![
                    depl.name.clone(),
                    df.source_id.clone(),
                    df.destination_id.clone(),
                    df.bandwidth_required.to_string(),
                    df.latency_required.to_string(),
                ]
            })
        }),
    )
}

impl Render for Deployment {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_deployments(writer, [self])
    }
}

impl Render for DeploymentList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_deployments(writer, &self.deployments)
    }
}

// Microservices

const MICROSERVICE_HEADER: &[&str] = &[
    "ID",
    "Name",
    "Description",
    "ApplicationID",
    "NodeID",
    "RegionID",
    "Status",
];

fn microservice_row(ms: &Microservice) -> Vec<String> {
    vec![
        ms.id.clone(),
        ms.name.clone(),
        ms.description.clone(),
        ms.application_id.clone(),
        ms.node_id.clone(),
        ms.region_id.clone(),
        ms.status.clone(),
    ]
}

impl Render for Microservice {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, MICROSERVICE_HEADER, [microservice_row(self)])
    }
}

impl Render for MicroserviceList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(
            writer,
            MICROSERVICE_HEADER,
            self.microservices.iter().map(microservice_row),
        )
    }
}

// Nodes

const NODE_HEADER: &[&str] = &[
    "ID",
    "Architecture",
    "Version",
    "Distribution",
    "RegionID",
    "CPUCapacity",
    "CPUAvailable",
    "MemoryCapacity",
    "MemoryAvailable",
    "DiskCapacity",
    "DiskAvailable",
    "Status",
];

fn node_row(node: &Node) -> Vec<String> {
    vec![
        node.id.clone(),
        node.architecture.clone(),
        node.version.clone(),
        node.distribution.clone(),
        node.region_id.clone(),
        node.cpu_capacity.clone(),
        node.cpu_available.clone(),
        node.memory_capacity.clone(),
        node.memory_available.clone(),
        node.disk_capacity.clone(),
        node.disk_available.clone(),
        node.status.clone(),
    ]
}

impl Render for Node {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, NODE_HEADER, [node_row(self)])
    }
}

impl Render for NodeList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, NODE_HEADER, self.nodes.iter().map(node_row))
    }
}

// Regions

const REGION_HEADER: &[&str] = &[
    "ID",
    "Description",
    "Location",
    "Tier",
    "CPUPrice",
    "MemPrice",
    "DiskPrice",
    "Relationship Id",
];

fn region_row(region: &Region) -> Vec<String> {
    let relationship_ids = region
        .relationships
        .iter()
        .map(|rel| rel.relationship_id.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let prices = region.prices.as_ref();
    vec![
        region.id.clone(),
        region.description.clone(),
        region.location.clone(),
        region.tier.to_string(),
        price_cell(prices.map(|p| &p.cpu)),
        price_cell(prices.map(|p| &p.memory)),
        price_cell(prices.map(|p| &p.disk)),
        relationship_ids,
    ]
}

impl Render for Region {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, REGION_HEADER, [region_row(self)])
    }
}

impl Render for RegionList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, REGION_HEADER, self.regions.iter().map(region_row))
    }
}

// Relationships

const RELATIONSHIP_HEADER: &[&str] = &[
    "ID",
    "EndpointA",
    "EndpointB",
    "RegionID",
    "BandwidthCapacity",
    "BandwidthAvailable",
    "Latency",
    "BandwidthPrice",
    "LatencyPrice",
    "Status",
];

fn relationship_row(rel: &Relationship) -> Vec<String> {
    let prices = rel.prices.as_ref();
    vec![
        rel.id.clone(),
        rel.endpoint_a.clone(),
        rel.endpoint_b.clone(),
        rel.region_id.clone(),
        rel.bandwidth_capacity.to_string(),
        rel.bandwidth_available.to_string(),
        rel.latency.to_string(),
        price_cell(prices.map(|p| &p.bandwidth)),
        price_cell(prices.map(|p| &p.latency)),
        rel.status.clone(),
    ]
}

impl Render for Relationship {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, RELATIONSHIP_HEADER, [relationship_row(self)])
    }
}

impl Render for RelationshipList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(
            writer,
            RELATIONSHIP_HEADER,
            self.relationships.iter().map(relationship_row),
        )
    }
}

// External endpoints

const EXTERNAL_ENDPOINT_HEADER: &[&str] = &[
    "ID",
    "Name",
    "Description",
    "Type",
    "Location",
    "RegionID",
    "IPAddress",
];

fn external_endpoint_row(ee: &ExternalEndpoint) -> Vec<String> {
    vec![
        ee.id.clone(),
        ee.name.clone(),
        ee.description.clone(),
        ee.endpoint_type.clone(),
        ee.location.clone(),
        ee.region_id.clone(),
        ee.ip_address.clone(),
    ]
}

impl Render for ExternalEndpoint {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, EXTERNAL_ENDPOINT_HEADER, [external_endpoint_row(self)])
    }
}

impl Render for ExternalEndpointList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(
            writer,
            EXTERNAL_ENDPOINT_HEADER,
            self.externalendpoints.iter().map(external_endpoint_row),
        )
    }
}

// Dynamic nodes

const DYNAMIC_NODE_HEADER: &[&str] = &["ID", "IPAddress", "NodeID", "RegionID"];

fn dynamic_node_row(dn: &DynamicNode) -> Vec<String> {
    vec![
        dn.id.clone(),
        dn.ip_address.clone(),
        dn.node_id.clone(),
        dn.region_id.clone(),
    ]
}

impl Render for DynamicNode {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(writer, DYNAMIC_NODE_HEADER, [dynamic_node_row(self)])
    }
}

impl Render for DynamicNodeList {
    fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_table(
            writer,
            DYNAMIC_NODE_HEADER,
            self.dynamicnodes.iter().map(dynamic_node_row),
        )
    }
}
