//! `delete`: remove one resource by key

use std::io::Write;

use fogatlas_api::{
    Application, Deployment, DynamicNode, ExternalEndpoint, Microservice, Node, Region,
    Relationship,
};
use fogatlas_client::FogAtlasApi;

use crate::cli::DeleteArgs;
use crate::commands::given;
use crate::error::{CtlError, Result};
use crate::resource::ResourceKind;

/// Delete the resource keyed by `--id` and print the orchestrator's message
///
/// # Errors
/// Returns an error for an unknown resource token, a missing `--id` or a
/// failed remote call.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &DeleteArgs,
    out: &mut W,
) -> Result<()> {
    let kind: ResourceKind = args.resource.parse()?;
    let Some(key) = given(&args.id) else {
        return Err(CtlError::MissingOption("--id"));
    };

    let message = remove(api, kind, key)
        .await
        .map_err(CtlError::remote("delete", kind.label()))?;
    writeln!(out, "{message}")?;
    Ok(())
}

/// Delete one resource of the given kind
///
/// # Errors
/// Returns the client error of the failed call.
pub async fn remove<A: FogAtlasApi>(
    api: &A,
    kind: ResourceKind,
    key: &str,
) -> fogatlas_client::Result<String> {
    tracing::debug!(resource = %kind, key, "deleting resource");
    match kind {
        ResourceKind::Applications => api.remove::<Application>(key).await,
        ResourceKind::Deployments => api.remove::<Deployment>(key).await,
        ResourceKind::Microservices => api.remove::<Microservice>(key).await,
        ResourceKind::Nodes => api.remove::<Node>(key).await,
        ResourceKind::Regions => api.remove::<Region>(key).await,
        ResourceKind::Relationships => api.remove::<Relationship>(key).await,
        ResourceKind::ExternalEndpoints => api.remove::<ExternalEndpoint>(key).await,
        ResourceKind::DynamicNodes => api.remove::<DynamicNode>(key).await,
    }
}

