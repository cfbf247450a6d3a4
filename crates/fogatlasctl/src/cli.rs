//! Command-line surface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const RESOURCES: &str = "{applications|deployments|microservices|nodes|regions|relationships|\
externalendpoints|dynamicnodes}";

/// Command line interface for FogAtlas
#[derive(Parser, Debug)]
#[command(name = "fogatlasctl", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve information on a resource
    Get(GetArgs),
    /// Create/update a resource
    Put(PutArgs),
    /// Update a resource
    Patch(PatchArgs),
    /// Delete a resource
    Delete(DeleteArgs),
    /// Create/update a set of resources
    #[command(name = "putAll")]
    PutAll(PutAllArgs),
    /// Delete all resources of the given type
    #[command(name = "deleteAll")]
    DeleteAll(DeleteAllArgs),
}

impl Commands {
    /// Endpoint given on the command line, if any
    pub fn endpoint(&self) -> Option<&str> {
        let endpoint = match self {
            Commands::Get(args) => &args.endpoint,
            Commands::Put(args) => &args.endpoint,
            Commands::Patch(args) => &args.endpoint,
            Commands::Delete(args) => &args.endpoint,
            Commands::PutAll(args) => &args.endpoint,
            Commands::DeleteAll(args) => &args.endpoint,
        };
        endpoint.endpoint.as_deref().filter(|e| !e.is_empty())
    }
}

/// API endpoint shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArg {
    /// API endpoint (host:port) [default: 127.0.0.1:8080]
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GetArgs {
    #[arg(
        value_name = "RESOURCE",
        help = RESOURCES,
        default_value = "",
        hide_default_value = true
    )]
    pub resource: String,

    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// Identifier of the resource to be retrieved
    #[arg(long)]
    pub id: Option<String>,

    /// Identifier of the region the resource belongs to (valid only for nodes,
    /// externalendpoints, relationships and dynamicnodes)
    #[arg(long = "region_id")]
    pub region_id: Option<String>,

    /// Identifier of the node the resource belongs to (valid only for
    /// microservices)
    #[arg(long = "node_id")]
    pub node_id: Option<String>,

    /// Status of the deployment (valid only for deployments)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PutArgs {
    #[arg(
        value_name = "RESOURCE",
        help = RESOURCES,
        default_value = "",
        hide_default_value = true
    )]
    pub resource: String,

    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// Identifier of the resource to be created/updated
    #[arg(long)]
    pub id: Option<String>,

    /// File containing the resource to be created/updated in JSON format
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatchArgs {
    #[arg(
        value_name = "RESOURCE",
        help = "{deployments}",
        default_value = "",
        hide_default_value = true
    )]
    pub resource: String,

    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// Identifier of the resource to be updated
    #[arg(long)]
    pub id: Option<String>,

    /// New value of the status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeleteArgs {
    #[arg(
        value_name = "RESOURCE",
        help = RESOURCES,
        default_value = "",
        hide_default_value = true
    )]
    pub resource: String,

    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// Identifier of the resource to be deleted
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PutAllArgs {
    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// YAML file that describes the resources to be loaded
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeleteAllArgs {
    #[arg(
        value_name = "RESOURCE",
        help = RESOURCES,
        default_value = "",
        hide_default_value = true
    )]
    pub resource: String,

    #[command(flatten)]
    pub endpoint: EndpointArg,

    /// Only delete dynamic nodes of this region
    #[arg(long = "region_id")]
    pub region_id: Option<String>,
}
