//! `putAll`: upsert every resource listed in a bulk descriptor

use std::io::Write;

use fogatlas_api::Resource;
use fogatlas_client::FogAtlasApi;

use crate::cli::PutAllArgs;
use crate::commands::BulkReport;
use crate::descriptor::BulkDescriptor;
use crate::error::{CtlError, Result};
use crate::resource::ResourceKind;

/// Load the descriptor named by `--file` and upsert its contents
///
/// # Errors
/// Returns an error if `--file` is missing or the descriptor cannot be
/// loaded. Failed items are reported on `out` and do not fail the command.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &PutAllArgs,
    out: &mut W,
) -> Result<BulkReport> {
    let Some(file) = args.file.as_deref().filter(|f| !f.as_os_str().is_empty()) else {
        return Err(CtlError::MissingOption("--file"));
    };
    let descriptor = BulkDescriptor::load(file)?;
    tracing::debug!(file = %file.display(), items = descriptor.len(), "loaded descriptor");
    apply(api, &descriptor, out).await
}

/// Upsert every item of a descriptor, one call at a time
///
/// Types go in a fixed order: applications, regions, deployments,
/// microservices, nodes, relationships, external endpoints, dynamic nodes;
/// items keep their list order within a type. Each key comes from the item
/// body: the id, except for deployments and microservices which are keyed
/// by name.
///
/// # Errors
/// Only fails if writing to `out` fails.
pub async fn apply<A: FogAtlasApi, W: Write>(
    api: &A,
    descriptor: &BulkDescriptor,
    out: &mut W,
) -> Result<BulkReport> {
    let mut report = BulkReport::default();

    let applications = descriptor.applications.iter().map(|app| (app.id.as_str(), app));
    upsert_each(api, ResourceKind::Applications, applications, out, &mut report).await?;

    let regions = descriptor.regions.iter().map(|reg| (reg.id.as_str(), reg));
    upsert_each(api, ResourceKind::Regions, regions, out, &mut report).await?;

    let deployments = descriptor.deployments.iter().map(|depl| (depl.name.as_str(), depl));
    upsert_each(api, ResourceKind::Deployments, deployments, out, &mut report).await?;

    let microservices = descriptor.microservices.iter().map(|ms| (ms.name.as_str(), ms));
    upsert_each(api, ResourceKind::Microservices, microservices, out, &mut report).await?;

    let nodes = descriptor.nodes.iter().map(|node| (node.id.as_str(), node));
    upsert_each(api, ResourceKind::Nodes, nodes, out, &mut report).await?;

    let relationships = descriptor.relationships.iter().map(|rel| (rel.id.as_str(), rel));
    upsert_each(api, ResourceKind::Relationships, relationships, out, &mut report).await?;

    let endpoints = descriptor.externalendpoints.iter().map(|ee| (ee.id.as_str(), ee));
    upsert_each(api, ResourceKind::ExternalEndpoints, endpoints, out, &mut report).await?;

    let dynamic_nodes = descriptor.dynamic_nodes.iter().map(|dn| (dn.id.as_str(), dn));
    upsert_each(api, ResourceKind::DynamicNodes, dynamic_nodes, out, &mut report).await?;

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "bulk load finished"
    );
    Ok(report)
}

async fn upsert_each<'a, A, R, W>(
    api: &A,
    kind: ResourceKind,
    items: impl Iterator<Item = (&'a str, &'a R)>,
    out: &mut W,
    report: &mut BulkReport,
) -> Result<()>
where
    A: FogAtlasApi,
    R: Resource,
    W: Write,
{
    for (key, item) in items {
        match api.upsert::<R>(key, item).await {
            Ok(message) => {
                report.succeeded += 1;
                writeln!(out, "{message}")?;
            }
            Err(err) => {
                report.failed += 1;
                tracing::warn!(resource = %kind, key, error = %err, "upsert failed");
                writeln!(out, "error while sending request: {err}")?;
            }
        }
    }
    Ok(())
}
