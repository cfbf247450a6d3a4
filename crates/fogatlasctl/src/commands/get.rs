//! `get`: fetch one resource by key, or list a collection

use std::io::Write;

use fogatlas_api::{
    Application, Deployment, DynamicNode, ExternalEndpoint, ListQuery, Microservice, Node,
    Region, Relationship, Resource,
};
use fogatlas_client::FogAtlasApi;

use crate::cli::GetArgs;
use crate::commands::given;
use crate::error::{CtlError, Result};
use crate::render::{Render, Response};
use crate::resource::ResourceKind;

/// Fetch the requested resource(s) and render them as tables
///
/// # Errors
/// Returns an error for an unknown resource token or a failed remote call.
pub async fn execute<A: FogAtlasApi, W: Write>(
    api: &A,
    args: &GetArgs,
    out: &mut W,
) -> Result<()> {
    let kind: ResourceKind = args.resource.parse()?;
    let response = fetch(api, kind, args).await?;
    response.render(out)?;
    Ok(())
}

/// Issue the single call a get command maps to
///
/// With `--id` this is a fetch by key (the deployment name for
/// deployments); otherwise a list call carrying only the filter the
/// collection understands.
///
/// # Errors
/// Returns an error if the remote call fails.
pub async fn fetch<A: FogAtlasApi>(
    api: &A,
    kind: ResourceKind,
    args: &GetArgs,
) -> Result<Response> {
    let key = given(&args.id);
    let by_region = || ListQuery {
        region_id: given(&args.region_id).map(str::to_string),
        ..Default::default()
    };

    let response = match kind {
        ResourceKind::Applications => match key {
            Some(id) => Response::Application(one::<A, Application>(api, kind, id).await?),
            None => {
                let list = all::<A, Application>(api, kind, ListQuery::default()).await?;
                Response::Applications(list)
            }
        },
        ResourceKind::Deployments => match key {
            Some(name) => Response::Deployment(one::<A, Deployment>(api, kind, name).await?),
            None => {
                let query = ListQuery {
                    status: given(&args.status).map(str::to_string),
                    ..Default::default()
                };
                Response::Deployments(all::<A, Deployment>(api, kind, query).await?)
            }
        },
        ResourceKind::Microservices => match key {
            Some(id) => Response::Microservice(one::<A, Microservice>(api, kind, id).await?),
            None => {
                let query = ListQuery {
                    node_id: given(&args.node_id).map(str::to_string),
                    ..Default::default()
                };
                Response::Microservices(all::<A, Microservice>(api, kind, query).await?)
            }
        },
        ResourceKind::Nodes => match key {
            Some(id) => Response::Node(one::<A, Node>(api, kind, id).await?),
            None => Response::Nodes(all::<A, Node>(api, kind, by_region()).await?),
        },
        ResourceKind::Regions => match key {
            Some(id) => Response::Region(one::<A, Region>(api, kind, id).await?),
            None => Response::Regions(all::<A, Region>(api, kind, ListQuery::default()).await?),
        },
        ResourceKind::Relationships => match key {
            Some(id) => Response::Relationship(one::<A, Relationship>(api, kind, id).await?),
            None => {
                let list = all::<A, Relationship>(api, kind, by_region()).await?;
                Response::Relationships(list)
            }
        },
        ResourceKind::ExternalEndpoints => match key {
            Some(id) => {
                Response::ExternalEndpoint(one::<A, ExternalEndpoint>(api, kind, id).await?)
            }
            None => Response::ExternalEndpoints(
                all::<A, ExternalEndpoint>(api, kind, by_region()).await?,
            ),
        },
        ResourceKind::DynamicNodes => match key {
            Some(id) => Response::DynamicNode(one::<A, DynamicNode>(api, kind, id).await?),
            None => {
                let list = all::<A, DynamicNode>(api, kind, by_region()).await?;
                Response::DynamicNodes(list)
            }
        },
    };
    Ok(response)
}

async fn one<A: FogAtlasApi, R: Resource>(api: &A, kind: ResourceKind, key: &str) -> Result<R> {
    tracing::debug!(resource = %kind, key, "fetching resource");
    api.fetch::<R>(key)
        .await
        .map_err(CtlError::remote("get", kind.label()))
}

async fn all<A: FogAtlasApi, R: Resource>(
    api: &A,
    kind: ResourceKind,
    query: ListQuery,
) -> Result<R::List> {
    tracing::debug!(resource = %kind, ?query, "listing resources");
    api.list::<R>(&query)
        .await
        .map_err(CtlError::remote("get", kind.label()))
}
