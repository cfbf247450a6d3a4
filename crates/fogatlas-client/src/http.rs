//! HTTP client for the FogAtlas orchestrator

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use fogatlas_api::{ApiMessage, ListQuery, PatchStatus, Resource};

use crate::api::FogAtlasApi;
use crate::error::{ClientError, Result};

/// Path every API route lives under
pub const API_PREFIX: &str = "/api/v2.0.0/";

/// HTTP client for communicating with a FogAtlas orchestrator
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// `endpoint` is either `host:port` or a full `http://host:port` URL; a
    /// bare host is reached over plain HTTP.
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL.
    ///
    /// # Example
    /// ```no_run
    /// use fogatlas_client::HttpClient;
    ///
    /// let client = HttpClient::new("127.0.0.1:8080")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Self::with_client(endpoint, Client::new())
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL or names a scheme
    /// other than `http`.
    pub fn with_client(endpoint: impl AsRef<str>, client: Client) -> Result<Self> {
        let endpoint = endpoint.as_ref().trim_end_matches('/');
        let root = if endpoint.contains("://") {
            Url::parse(endpoint)?
        } else {
            Url::parse(&format!("http://{endpoint}"))?
        };
        if root.scheme() != "http" || root.cannot_be_a_base() {
            return Err(ClientError::InvalidEndpoint(endpoint.to_string()));
        }
        let base_url = root.join(API_PREFIX)?;
        Ok(Self { client, base_url })
    }

    /// Base URL all routes are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a full URL from path segments, escaping each one
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Turn a non-success status into an API error
    async fn check(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }
        Ok(response)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = Self::check(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Perform a PUT request with JSON body
    async fn put(&self, url: Url, body: &impl serde::Serialize) -> Result<String> {
        tracing::debug!(%url, "PUT");
        let response = Self::check(self.client.put(url).json(body).send().await?).await?;
        Ok(ApiMessage::from_body(&response.text().await?))
    }

    /// Perform a PATCH request with JSON body
    async fn patch(&self, url: Url, body: &impl serde::Serialize) -> Result<String> {
        tracing::debug!(%url, "PATCH");
        let response = Self::check(self.client.patch(url).json(body).send().await?).await?;
        Ok(ApiMessage::from_body(&response.text().await?))
    }

    /// Perform a DELETE request
    async fn delete(&self, url: Url) -> Result<String> {
        tracing::debug!(%url, "DELETE");
        let response = Self::check(self.client.delete(url).send().await?).await?;
        Ok(ApiMessage::from_body(&response.text().await?))
    }

    /// URL of a collection with the query string built from `query`
    fn list_url(&self, collection: &str, query: &ListQuery) -> Result<Url> {
        let mut url = self.url(&[collection])?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl FogAtlasApi for HttpClient {
    async fn list<R: Resource>(&self, query: &ListQuery) -> Result<R::List> {
        let url = self.list_url(R::COLLECTION, query)?;
        self.get(url).await
    }

    async fn fetch<R: Resource>(&self, key: &str) -> Result<R> {
        let url = self.url(&[R::COLLECTION, key])?;
        self.get(url).await
    }

    async fn upsert<R: Resource>(&self, key: &str, body: &R) -> Result<String> {
        let url = self.url(&[R::COLLECTION, key])?;
        self.put(url, body).await
    }

    async fn remove<R: Resource>(&self, key: &str) -> Result<String> {
        let url = self.url(&[R::COLLECTION, key])?;
        self.delete(url).await
    }

    async fn patch_deployment_status(&self, name: &str, patch: &PatchStatus) -> Result<String> {
        let url = self.url(&["deployments", name])?;
        self.patch(url, patch).await
    }
}
