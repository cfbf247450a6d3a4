//! `put`: create or replace one resource from a JSON file

use std::io::Write;
use std::path::Path;

use fogatlas_api::{
    Application, Deployment, DynamicNode, ExternalEndpoint, Microservice, Node, Region,
    Relationship, Resource,
};
use fogatlas_client::FogAtlasApi;

use crate::cli::PutArgs;
use crate::commands::given;
use crate::error::{CtlError, Result};
use crate::resource::ResourceKind;

/// Upsert the resource described by `--file` under the key given by `--id`
///
/// The key always comes from the flag, never from the file body. The
/// message returned by the orchestrator is printed as-is, empty or not.
///
/// # Errors
/// Returns an error for an unknown resource token, a missing option, an
/// unreadable or malformed file, or a failed remote call. Nothing is sent
/// unless the file decodes.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &PutArgs,
    out: &mut W,
) -> Result<()> {
    let kind: ResourceKind = args.resource.parse()?;
    let file = args.file.as_deref().filter(|f| !f.as_os_str().is_empty());
    let (Some(id), Some(file)) = (given(&args.id), file) else {
        return Err(CtlError::MissingOptions(&["--id", "--file"]));
    };

    let message = match kind {
        ResourceKind::Applications => upsert_file::<A, Application>(api, kind, id, file).await?,
        ResourceKind::Deployments => upsert_file::<A, Deployment>(api, kind, id, file).await?,
        ResourceKind::Microservices => upsert_file::<A, Microservice>(api, kind, id, file).await?,
        ResourceKind::Nodes => upsert_file::<A, Node>(api, kind, id, file).await?,
        ResourceKind::Regions => upsert_file::<A, Region>(api, kind, id, file).await?,
        ResourceKind::Relationships => upsert_file::<A, Relationship>(api, kind, id, file).await?,
        ResourceKind::ExternalEndpoints => {
            upsert_file::<A, ExternalEndpoint>(api, kind, id, file).await?
        }
        ResourceKind::DynamicNodes => upsert_file::<A, DynamicNode>(api, kind, id, file).await?,
    };
    writeln!(out, "{message}")?;
    Ok(())
}

/// Decode a single resource body from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or does not decode as `R`.
pub fn read_resource<R: Resource>(path: &Path) -> Result<R> {
    let content = std::fs::read_to_string(path).map_err(|source| CtlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

async fn upsert_file<A: FogAtlasApi, R: Resource>(
    api: &A,
    kind: ResourceKind,
    key: &str,
    file: &Path,
) -> Result<String> {
    let body = read_resource::<R>(file)?;
    tracing::debug!(resource = %kind, key, "upserting resource");
    api.upsert::<R>(key, &body)
        .await
        .map_err(CtlError::remote("put", kind.label()))
}
