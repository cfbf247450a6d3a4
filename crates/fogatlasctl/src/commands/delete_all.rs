//! `deleteAll`: delete every resource of one type

use std::io::Write;

use fogatlas_api::{
    Application, Deployment, DynamicNode, ExternalEndpoint, ListQuery, Microservice, Node,
    Region, Relationship, Resource,
};
use fogatlas_client::FogAtlasApi;

use crate::cli::DeleteAllArgs;
use crate::commands::{BulkReport, delete, given};
use crate::error::{CtlError, Result};
use crate::resource::ResourceKind;

/// List the collection, then delete each listed item by its key
///
/// `--region_id` narrows the listing for dynamic nodes only.
///
/// # Errors
/// Returns an error for an unknown resource token or a failed listing.
/// Failed deletes are reported on `out` and the loop moves on.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &DeleteAllArgs,
    out: &mut W,
) -> Result<BulkReport> {
    let kind: ResourceKind = args.resource.parse()?;
    let keys = list_keys(api, kind, given(&args.region_id)).await?;
    tracing::debug!(resource = %kind, count = keys.len(), "deleting listed resources");

    let mut report = BulkReport::default();
    for key in &keys {
        match delete::remove(api, kind, key).await {
            Ok(message) => {
                report.succeeded += 1;
                writeln!(out, "{message}")?;
            }
            Err(err) => {
                report.failed += 1;
                tracing::warn!(resource = %kind, key, error = %err, "delete failed");
                writeln!(out, "delete {} failed: {err}", kind.label())?;
            }
        }
    }
    Ok(report)
}

/// Keys of every item in the collection, in listing order
async fn list_keys<A: FogAtlasApi>(
    api: &A,
    kind: ResourceKind,
    region_id: Option<&str>,
) -> Result<Vec<String>> {
    let keys = match kind {
        ResourceKind::Applications => list::<A, Application>(api, kind, ListQuery::default())
            .await?
            .applications
            .into_iter()
            .map(|app| app.id)
            .collect(),
        ResourceKind::Deployments => list::<A, Deployment>(api, kind, ListQuery::default())
            .await?
            .deployments
            .into_iter()
            .map(|depl| depl.name)
            .collect(),
        ResourceKind::Microservices => list::<A, Microservice>(api, kind, ListQuery::default())
            .await?
            .microservices
            .into_iter()
            .map(|ms| ms.id)
            .collect(),
        ResourceKind::Nodes => list::<A, Node>(api, kind, ListQuery::default())
            .await?
            .nodes
            .into_iter()
            .map(|node| node.id)
            .collect(),
        ResourceKind::Regions => list::<A, Region>(api, kind, ListQuery::default())
            .await?
            .regions
            .into_iter()
            .map(|reg| reg.id)
            .collect(),
        ResourceKind::Relationships => list::<A, Relationship>(api, kind, ListQuery::default())
            .await?
            .relationships
            .into_iter()
            .map(|rel| rel.id)
            .collect(),
        ResourceKind::ExternalEndpoints => {
            list::<A, ExternalEndpoint>(api, kind, ListQuery::default())
                .await?
                .externalendpoints
                .into_iter()
                .map(|ee| ee.id)
                .collect()
        }
        ResourceKind::DynamicNodes => {
            let query = ListQuery {
                region_id: region_id.map(str::to_string),
                ..Default::default()
            };
            list::<A, DynamicNode>(api, kind, query)
                .await?
                .dynamicnodes
                .into_iter()
                .map(|dn| dn.id)
                .collect()
        }
    };
    Ok(keys)
}

async fn list<A: FogAtlasApi, R: Resource>(
    api: &A,
    kind: ResourceKind,
    query: ListQuery,
) -> Result<R::List> {
    api.list::<R>(&query)
        .await
        .map_err(CtlError::remote("get", kind.label()))
}
