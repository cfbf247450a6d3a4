//! `patch`: change the status of a deployment

use std::io::Write;

use fogatlas_api::PatchStatus;
use fogatlas_client::FogAtlasApi;

use crate::cli::PatchArgs;
use crate::commands::given;
use crate::error::{CtlError, Result};
use crate::resource::ResourceKind;

/// Send a status patch for the deployment named by `--id`
///
/// Deployments are the only resource that can be patched; any other token
/// is reported as unknown.
///
/// # Errors
/// Returns an error for a token other than `deployments`, a missing option
/// or a failed remote call.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &PatchArgs,
    out: &mut W,
) -> Result<()> {
    let kind: ResourceKind = args.resource.parse()?;
    if kind != ResourceKind::Deployments {
        return Err(CtlError::UnknownResource(args.resource.clone()));
    }
    let (Some(name), Some(status)) = (given(&args.id), given(&args.status)) else {
        return Err(CtlError::MissingOptions(&["--id", "--status"]));
    };

    let patch = PatchStatus {
        status: status.to_string(),
    };
    tracing::debug!(name, status, "patching deployment status");
    let message = api
        .patch_deployment_status(name, &patch)
        .await
        .map_err(CtlError::remote("patch", kind.label()))?;
    writeln!(out, "{message}")?;
    Ok(())
}
