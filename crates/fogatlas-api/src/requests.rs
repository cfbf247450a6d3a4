//! Request types for the API

use serde::{Deserialize, Serialize};

/// Body of a deployment status patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchStatus {
    pub status: String,
}

/// Optional filters for listing a collection
///
/// Only the filters the collection understands are ever set; unset filters
/// are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ListQuery {
    /// Query parameters in wire order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("region_id", &self.region_id),
            ("node_id", &self.node_id),
            ("status", &self.status),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.region_id.is_none() && self.node_id.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        let query = ListQuery::default();
        assert!(query.is_empty());
        assert!(query.pairs().is_empty());
    }

    #[test]
    fn test_query_pairs() {
        let query = ListQuery {
            region_id: Some("r1".into()),
            status: Some("running".into()),
            ..Default::default()
        };
        assert_eq!(query.pairs(), vec![("region_id", "r1"), ("status", "running")]);
    }
}
