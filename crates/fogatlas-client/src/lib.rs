//! fogatlas-client: HTTP client library for the FogAtlas REST API
//!
//! # Example
//!
//! ```no_run
//! use fogatlas_api::{ListQuery, Node};
//! use fogatlas_client::{FogAtlasApi, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("127.0.0.1:8080")?;
//!
//! // List the nodes of one region
//! let query = ListQuery {
//!     region_id: Some("trento".into()),
//!     ..Default::default()
//! };
//! let nodes = client.list::<Node>(&query).await?;
//!
//! // Get a single node
//! let node = client.fetch::<Node>("fog-node-1").await?;
//!
//! // Delete it
//! let message = client.remove::<Node>("fog-node-1").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod http;

pub use api::FogAtlasApi;
pub use error::{ClientError, Result};
pub use http::{API_PREFIX, HttpClient};
