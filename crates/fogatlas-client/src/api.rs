//! The operations the CLI needs from a FogAtlas orchestrator

use async_trait::async_trait;

use fogatlas_api::{ListQuery, PatchStatus, Resource};

use crate::error::Result;

/// Remote FogAtlas API
///
/// Mutating calls return the message carried by the response body, which is
/// empty when the orchestrator has nothing to report.
#[async_trait]
pub trait FogAtlasApi: Send + Sync {
    /// List a collection, narrowed by whichever filters are set
    async fn list<R: Resource>(&self, query: &ListQuery) -> Result<R::List>;

    /// Fetch a single record by its key
    async fn fetch<R: Resource>(&self, key: &str) -> Result<R>;

    /// Create or replace the record stored under `key`
    async fn upsert<R: Resource>(&self, key: &str, body: &R) -> Result<String>;

    /// Delete the record stored under `key`
    async fn remove<R: Resource>(&self, key: &str) -> Result<String>;

    /// Change the status of a deployment
    async fn patch_deployment_status(&self, name: &str, patch: &PatchStatus) -> Result<String>;
}
