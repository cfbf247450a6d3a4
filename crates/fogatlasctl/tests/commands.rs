use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use fogatlas_api::{ListQuery, PatchStatus, Resource};
use fogatlas_client::{ClientError, FogAtlasApi};
use fogatlasctl::cli::{
    DeleteAllArgs, DeleteArgs, EndpointArg, GetArgs, PatchArgs, PutAllArgs, PutArgs,
};
use fogatlasctl::commands::{BulkReport, delete, delete_all, get, patch, put, put_all};
use fogatlasctl::{Commands, CtlError, Response, dispatch};

/// A call as seen by the orchestrator
#[derive(Debug, Clone, PartialEq)]
enum Call {
    List(&'static str, ListQuery),
    Fetch(&'static str, String),
    Upsert(&'static str, String, Value),
    Remove(&'static str, String),
    Patch(String, String),
}

/// In-memory orchestrator recording every call
#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    lists: HashMap<&'static str, Value>,
    items: HashMap<(&'static str, String), Value>,
    failing_keys: HashSet<String>,
    fail_lists: bool,
    message: String,
}

impl RecordingApi {
    fn with_list(mut self, collection: &'static str, items: Value) -> Self {
        let mut body = serde_json::Map::new();
        body.insert(collection.to_string(), items);
        self.lists.insert(collection, Value::Object(body));
        self
    }

    fn with_item(mut self, collection: &'static str, key: &str, item: Value) -> Self {
        self.items.insert((collection, key.to_string()), item);
        self
    }

    fn failing(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_key(&self, key: &str) -> fogatlas_client::Result<()> {
        if self.failing_keys.contains(key) {
            return Err(ClientError::Api {
                status: 500,
                message: format!("cannot handle {key}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FogAtlasApi for RecordingApi {
    async fn list<R: Resource>(&self, query: &ListQuery) -> fogatlas_client::Result<R::List> {
        self.record(Call::List(R::COLLECTION, query.clone()));
        if self.fail_lists {
            return Err(ClientError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        let body = self.lists.get(R::COLLECTION).cloned().unwrap_or_else(|| json!({}));
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch<R: Resource>(&self, key: &str) -> fogatlas_client::Result<R> {
        self.record(Call::Fetch(R::COLLECTION, key.to_string()));
        self.check_key(key)?;
        let body = self
            .items
            .get(&(R::COLLECTION, key.to_string()))
            .cloned()
            .unwrap_or_else(|| json!({}));
        Ok(serde_json::from_value(body)?)
    }

    async fn upsert<R: Resource>(&self, key: &str, body: &R) -> fogatlas_client::Result<String> {
        self.record(Call::Upsert(
            R::COLLECTION,
            key.to_string(),
            serde_json::to_value(body)?,
        ));
        self.check_key(key)?;
        Ok(self.message.clone())
    }

    async fn remove<R: Resource>(&self, key: &str) -> fogatlas_client::Result<String> {
        self.record(Call::Remove(R::COLLECTION, key.to_string()));
        self.check_key(key)?;
        Ok(self.message.clone())
    }

    async fn patch_deployment_status(
        &self,
        name: &str,
        patch: &PatchStatus,
    ) -> fogatlas_client::Result<String> {
        self.record(Call::Patch(name.to_string(), patch.status.clone()));
        self.check_key(name)?;
        Ok(self.message.clone())
    }
}

/// Every resource token; each one is also its collection path
const ALL_TOKENS: [&str; 8] = [
    "applications",
    "deployments",
    "microservices",
    "nodes",
    "regions",
    "relationships",
    "externalendpoints",
    "dynamicnodes",
];

fn get_args(resource: &str) -> GetArgs {
    GetArgs {
        resource: resource.to_string(),
        ..Default::default()
    }
}

fn json_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

// get

#[tokio::test]
async fn get_with_id_fetches_once_and_never_lists() {
    for token in ALL_TOKENS {
        let api = RecordingApi::default();
        let args = GetArgs {
            id: Some("x1".into()),
            region_id: Some("trento".into()),
            ..get_args(token)
        };
        let mut out = Vec::new();
        get::execute(&api, &args, &mut out).await.unwrap();
        assert_eq!(api.calls(), vec![Call::Fetch(token, "x1".into())], "{token}");
        assert!(!out.is_empty(), "{token} rendered nothing");
    }
}

#[tokio::test]
async fn get_without_id_lists_once_without_filters() {
    for token in ALL_TOKENS {
        let api = RecordingApi::default();
        let mut out = Vec::new();
        get::execute(&api, &get_args(token), &mut out).await.unwrap();
        assert_eq!(
            api.calls(),
            vec![Call::List(token, ListQuery::default())],
            "{token}"
        );
    }
}

#[tokio::test]
async fn get_list_carries_only_the_matching_filter() {
    let flags = |token: &str| GetArgs {
        region_id: Some("trento".into()),
        node_id: Some("n1".into()),
        status: Some("running".into()),
        ..get_args(token)
    };
    let region = ListQuery {
        region_id: Some("trento".into()),
        ..Default::default()
    };
    let expected = [
        ("applications", ListQuery::default()),
        ("regions", ListQuery::default()),
        (
            "deployments",
            ListQuery {
                status: Some("running".into()),
                ..Default::default()
            },
        ),
        (
            "microservices",
            ListQuery {
                node_id: Some("n1".into()),
                ..Default::default()
            },
        ),
        ("nodes", region.clone()),
        ("relationships", region.clone()),
        ("externalendpoints", region.clone()),
        ("dynamicnodes", region),
    ];

    for (token, query) in expected {
        let api = RecordingApi::default();
        let mut out = Vec::new();
        get::execute(&api, &flags(token), &mut out).await.unwrap();
        assert_eq!(api.calls(), vec![Call::List(token, query)], "{token}");
    }
}

#[tokio::test]
async fn get_empty_id_counts_as_absent() {
    let api = RecordingApi::default();
    let args = GetArgs {
        id: Some(String::new()),
        ..get_args("regions")
    };
    get::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(api.calls(), vec![Call::List("regions", ListQuery::default())]);
}

#[tokio::test]
async fn get_renders_listed_items() {
    let api = RecordingApi::default().with_list(
        "nodes",
        json!([
            { "id": "fog-node-1", "architecture": "arm64", "status": "ready" },
            { "id": "fog-node-2", "architecture": "amd64", "status": "ready" }
        ]),
    );
    let mut out = Vec::new();
    get::execute(&api, &get_args("nodes"), &mut out).await.unwrap();
    let out = output(out);
    assert!(out.contains("fog-node-1"));
    assert!(out.contains("fog-node-2"));
    assert!(out.contains("arm64"));
}

#[tokio::test]
async fn get_tolerates_null_fields_in_listing() {
    let api = RecordingApi::default().with_list(
        "deployments",
        json!([{ "name": "d1", "description": null, "microservices": null, "dataflows": null }]),
    );
    let mut out = Vec::new();
    get::execute(&api, &get_args("deployments"), &mut out).await.unwrap();
    assert!(output(out).contains("d1"));
}

#[tokio::test]
async fn get_returns_tagged_response() {
    let api = RecordingApi::default().with_item("deployments", "d1", json!({ "name": "d1" }));
    let args = GetArgs {
        id: Some("d1".into()),
        ..get_args("deployments")
    };
    let kind = "deployments".parse().unwrap();
    let response = get::fetch(&api, kind, &args).await.unwrap();
    assert!(matches!(response, Response::Deployment(ref d) if d.name == "d1"));
}

#[tokio::test]
async fn get_remote_failure_aborts_without_output() {
    let api = RecordingApi::default().failing("x1");
    let args = GetArgs {
        id: Some("x1".into()),
        ..get_args("externalendpoints")
    };
    let mut out = Vec::new();
    let err = get::execute(&api, &args, &mut out).await.unwrap_err();
    assert!(err.to_string().starts_with("get external endpoints failed: "));
    assert!(out.is_empty());
}

// put

#[tokio::test]
async fn put_requires_id_and_file() {
    let file = json_file(r#"{"id": "n1"}"#);
    let cases = [
        PutArgs {
            resource: "nodes".into(),
            file: Some(file.path().to_path_buf()),
            ..Default::default()
        },
        PutArgs {
            resource: "nodes".into(),
            id: Some("n1".into()),
            ..Default::default()
        },
        PutArgs {
            resource: "nodes".into(),
            id: Some(String::new()),
            file: Some(file.path().to_path_buf()),
            ..Default::default()
        },
    ];
    for args in cases {
        let api = RecordingApi::default();
        let err = put::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "options --id and --file are required");
        assert!(api.calls().is_empty());
    }
}

#[tokio::test]
async fn put_invalid_json_fails_before_any_call() {
    let file = json_file("{ not json");
    let api = RecordingApi::default();
    let args = PutArgs {
        resource: "applications".into(),
        id: Some("app1".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let err = put::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, CtlError::FileFormat(_)));
    assert!(err.to_string().starts_with("wrong file format: "));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn put_unreadable_file_fails_before_any_call() {
    let api = RecordingApi::default();
    let args = PutArgs {
        resource: "regions".into(),
        id: Some("trento".into()),
        file: Some(PathBuf::from("/nonexistent/region.json")),
        ..Default::default()
    };
    let err = put::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, CtlError::ReadFile { .. }));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn put_keys_by_flag_not_by_body() {
    let file = json_file(r#"{"id": "from-body", "name": "detector", "extra_field": 7}"#);
    let api = RecordingApi {
        message: "stored".to_string(),
        ..Default::default()
    };
    let args = PutArgs {
        resource: "microservices".into(),
        id: Some("from-flag".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let mut out = Vec::new();
    put::execute(&api, &args, &mut out).await.unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    let Call::Upsert(collection, key, body) = &calls[0] else {
        panic!("expected an upsert, got {calls:?}");
    };
    assert_eq!(*collection, "microservices");
    assert_eq!(key, "from-flag");
    assert_eq!(body["id"], "from-body");
    assert_eq!(body["extra_field"], 7);
    assert_eq!(output(out), "stored\n");
}

#[tokio::test]
async fn put_prints_empty_message_on_success() {
    let file = json_file(r#"{"name": "d1"}"#);
    let api = RecordingApi::default();
    let args = PutArgs {
        resource: "deployments".into(),
        id: Some("d1".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let mut out = Vec::new();
    put::execute(&api, &args, &mut out).await.unwrap();
    assert_eq!(output(out), "\n");
}

#[tokio::test]
async fn put_sends_a_partial_file_unchanged() {
    let file = json_file(
        r#"{"name": "d1", "dataflows": [{"source_id": "ms1", "latency_required": 20}]}"#,
    );
    let api = RecordingApi::default();
    let args = PutArgs {
        resource: "deployments".into(),
        id: Some("d1".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    put::execute(&api, &args, &mut Vec::new()).await.unwrap();

    let body = json!({
        "name": "d1",
        "dataflows": [{ "source_id": "ms1", "latency_required": 20 }]
    });
    assert_eq!(
        api.calls(),
        vec![Call::Upsert("deployments", "d1".to_string(), body)]
    );
}

#[tokio::test]
async fn put_accepts_null_fields() {
    let file = json_file(r#"{"id": "a1", "description": null, "microservices": null}"#);
    let api = RecordingApi::default();
    let args = PutArgs {
        resource: "applications".into(),
        id: Some("a1".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    put::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(
        api.calls(),
        vec![Call::Upsert("applications", "a1".to_string(), json!({ "id": "a1" }))]
    );
}

// patch

#[tokio::test]
async fn patch_sends_deployment_status() {
    let api = RecordingApi::default();
    let args = PatchArgs {
        resource: "deployments".into(),
        id: Some("d1".into()),
        status: Some("stopped".into()),
        ..Default::default()
    };
    patch::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(api.calls(), vec![Call::Patch("d1".into(), "stopped".into())]);
}

#[tokio::test]
async fn patch_only_knows_deployments() {
    let api = RecordingApi::default();
    let args = PatchArgs {
        resource: "nodes".into(),
        id: Some("n1".into()),
        status: Some("ready".into()),
        ..Default::default()
    };
    let err = patch::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "resource specified (nodes) is unknown");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn patch_requires_id_and_status() {
    let api = RecordingApi::default();
    let args = PatchArgs {
        resource: "deployments".into(),
        id: Some("d1".into()),
        ..Default::default()
    };
    let err = patch::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "options --id and --status are required");
    assert!(api.calls().is_empty());
}

// delete

#[tokio::test]
async fn delete_requires_id() {
    let api = RecordingApi::default();
    let args = DeleteArgs {
        resource: "nodes".into(),
        ..Default::default()
    };
    let err = delete::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "option --id is required");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn delete_every_resource_type() {
    for token in ALL_TOKENS {
        let api = RecordingApi::default();
        let args = DeleteArgs {
            resource: token.into(),
            id: Some("x1".into()),
            endpoint: EndpointArg::default(),
        };
        let mut out = Vec::new();
        delete::execute(&api, &args, &mut out).await.unwrap();
        assert_eq!(api.calls(), vec![Call::Remove(token, "x1".into())], "{token}");
    }
}

#[tokio::test]
async fn delete_failure_names_the_resource() {
    let api = RecordingApi::default().failing("d1");
    let args = DeleteArgs {
        resource: "deployments".into(),
        id: Some("d1".into()),
        ..Default::default()
    };
    let err = delete::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert!(err.to_string().starts_with("delete deployments failed: "));
}

// unknown tokens

#[tokio::test]
async fn unknown_resource_is_rejected_without_calls() {
    let api = RecordingApi::default();
    let mut out = Vec::new();

    let err = get::execute(&api, &get_args("gateways"), &mut out).await.unwrap_err();
    assert_eq!(err.to_string(), "resource specified (gateways) is unknown");

    let put_args = PutArgs {
        resource: "gateways".into(),
        ..Default::default()
    };
    let err = put::execute(&api, &put_args, &mut out).await.unwrap_err();
    assert!(matches!(err, CtlError::UnknownResource(ref t) if t == "gateways"));

    let patch_args = PatchArgs {
        resource: "gateways".into(),
        ..Default::default()
    };
    let err = patch::execute(&api, &patch_args, &mut out).await.unwrap_err();
    assert!(matches!(err, CtlError::UnknownResource(_)));

    let delete_args = DeleteArgs {
        resource: "gateways".into(),
        id: Some("g1".into()),
        ..Default::default()
    };
    let err = delete::execute(&api, &delete_args, &mut out).await.unwrap_err();
    assert!(matches!(err, CtlError::UnknownResource(_)));

    let delete_all_args = DeleteAllArgs {
        resource: "gateways".into(),
        ..Default::default()
    };
    let err = delete_all::execute(&api, &delete_all_args, &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, CtlError::UnknownResource(_)));

    assert!(api.calls().is_empty());
    assert!(out.is_empty());
}

// putAll

const DESCRIPTOR: &str = r#"
dynamicnode:
  - id: dn1
externalendpoints:
  - id: cam1
relationships:
  - id: rel1
nodes:
  - id: n1
  - id: n2
microservices:
  - id: ms-id
    name: decoder
deployments:
  - name: d1
regions:
  - id: trento
applications:
  - id: app1
  - id: app2
"#;

#[tokio::test]
async fn put_all_upserts_in_fixed_type_order() {
    let file = json_file(DESCRIPTOR);
    let api = RecordingApi::default();
    let args = PutAllArgs {
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let report = put_all::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(
        report,
        BulkReport {
            succeeded: 10,
            failed: 0
        }
    );

    let keys: Vec<(&str, String)> = api
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::Upsert(collection, key, _) => (collection, key),
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("applications", "app1".to_string()),
            ("applications", "app2".to_string()),
            ("regions", "trento".to_string()),
            ("deployments", "d1".to_string()),
            ("microservices", "decoder".to_string()),
            ("nodes", "n1".to_string()),
            ("nodes", "n2".to_string()),
            ("relationships", "rel1".to_string()),
            ("externalendpoints", "cam1".to_string()),
            ("dynamicnodes", "dn1".to_string()),
        ]
    );
}

#[tokio::test]
async fn put_all_continues_past_failed_items() {
    let file = json_file("nodes:\n  - id: n1\n  - id: n2\n  - id: n3\nregions:\n  - id: r1\n");
    let api = RecordingApi::default().failing("n2").failing("r1");
    let args = PutAllArgs {
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let report = put_all::execute(&api, &args, &mut out).await.unwrap();
    assert_eq!(
        report,
        BulkReport {
            succeeded: 2,
            failed: 2
        }
    );
    assert_eq!(api.calls().len(), 4);

    let out = output(out);
    assert_eq!(out.matches("error while sending request: ").count(), 2);
    assert!(out.contains("cannot handle n2"));
}

#[tokio::test]
async fn put_all_requires_file() {
    let api = RecordingApi::default();
    let err = put_all::execute(&api, &PutAllArgs::default(), &mut Vec::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "option --file is required");
}

#[tokio::test]
async fn put_all_malformed_descriptor_sends_nothing() {
    let file = json_file("nodes: [ { id: n1");
    let api = RecordingApi::default();
    let args = PutAllArgs {
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let err = put_all::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert!(matches!(err, CtlError::Descriptor { .. }));
    assert!(api.calls().is_empty());
}

// deleteAll

#[tokio::test]
async fn delete_all_nodes_deletes_each_listed_item() {
    let api = RecordingApi::default()
        .with_list("nodes", json!([{ "id": "n1" }, { "id": "n2" }, { "id": "n3" }]))
        .failing("n2");
    let args = DeleteAllArgs {
        resource: "nodes".into(),
        ..Default::default()
    };
    let mut out = Vec::new();
    let report = delete_all::execute(&api, &args, &mut out).await.unwrap();
    assert_eq!(
        report,
        BulkReport {
            succeeded: 2,
            failed: 1
        }
    );
    assert_eq!(
        api.calls(),
        vec![
            Call::List("nodes", ListQuery::default()),
            Call::Remove("nodes", "n1".into()),
            Call::Remove("nodes", "n2".into()),
            Call::Remove("nodes", "n3".into()),
        ]
    );
    assert!(output(out).contains("delete nodes failed: "));
}

#[tokio::test]
async fn delete_all_deployments_keys_by_name() {
    let api = RecordingApi::default().with_list("deployments", json!([{ "name": "d1" }]));
    let args = DeleteAllArgs {
        resource: "deployments".into(),
        ..Default::default()
    };
    delete_all::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(api.calls()[1], Call::Remove("deployments", "d1".into()));
}

#[tokio::test]
async fn delete_all_filters_dynamic_nodes_by_region() {
    let api = RecordingApi::default();
    let args = DeleteAllArgs {
        resource: "dynamicnodes".into(),
        region_id: Some("trento".into()),
        ..Default::default()
    };
    delete_all::execute(&api, &args, &mut Vec::new()).await.unwrap();
    let query = ListQuery {
        region_id: Some("trento".into()),
        ..Default::default()
    };
    assert_eq!(api.calls(), vec![Call::List("dynamicnodes", query)]);

    let api = RecordingApi::default();
    let args = DeleteAllArgs {
        resource: "nodes".into(),
        region_id: Some("trento".into()),
        ..Default::default()
    };
    delete_all::execute(&api, &args, &mut Vec::new()).await.unwrap();
    assert_eq!(api.calls(), vec![Call::List("nodes", ListQuery::default())]);
}

#[tokio::test]
async fn delete_all_listing_failure_is_fatal() {
    let api = RecordingApi {
        fail_lists: true,
        ..Default::default()
    };
    let args = DeleteAllArgs {
        resource: "regions".into(),
        ..Default::default()
    };
    let err = delete_all::execute(&api, &args, &mut Vec::new()).await.unwrap_err();
    assert!(err.to_string().starts_with("get regions failed: "));
    assert_eq!(api.calls().len(), 1);
}

// round trip

#[tokio::test]
async fn put_then_get_renders_the_same_fields() {
    let body = json!({
        "id": "ee1",
        "name": "camera-north",
        "type": "camera",
        "location": "46.07,11.12",
        "ip_address": "10.0.3.4"
    });
    let file = json_file(&body.to_string());

    let writer = RecordingApi::default();
    let args = PutArgs {
        resource: "externalendpoints".into(),
        id: Some("ee1".into()),
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    put::execute(&writer, &args, &mut Vec::new()).await.unwrap();
    let Call::Upsert(_, _, stored) = writer.calls().remove(0) else {
        panic!("expected an upsert");
    };
    assert_eq!(stored, body);

    let reader = RecordingApi::default().with_item("externalendpoints", "ee1", stored);
    let args = GetArgs {
        id: Some("ee1".into()),
        ..get_args("externalendpoints")
    };
    let mut out = Vec::new();
    get::execute(&reader, &args, &mut out).await.unwrap();
    let out = output(out);
    for value in ["ee1", "camera-north", "camera", "46.07,11.12", "10.0.3.4"] {
        assert!(out.contains(value), "missing {value}");
    }
}

// dispatch

#[tokio::test]
async fn dispatch_bulk_run_with_failed_items_succeeds() {
    let file = json_file("nodes:\n  - id: n1\n  - id: n2\n");
    let api = RecordingApi::default().failing("n1").failing("n2");
    let command = Commands::PutAll(PutAllArgs {
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    });
    let mut out = Vec::new();
    dispatch(&api, &command, &mut out).await.unwrap();
    assert_eq!(output(out).matches("error while sending request: ").count(), 2);

    let api = RecordingApi::default()
        .with_list("regions", json!([{ "id": "r1" }]))
        .failing("r1");
    let command = Commands::DeleteAll(DeleteAllArgs {
        resource: "regions".into(),
        ..Default::default()
    });
    let mut out = Vec::new();
    dispatch(&api, &command, &mut out).await.unwrap();
    assert!(output(out).starts_with("delete regions failed: "));
}

#[tokio::test]
async fn dispatch_surfaces_handler_errors() {
    let api = RecordingApi::default();
    let command = Commands::Get(get_args(""));
    let err = dispatch(&api, &command, &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "resource specified () is unknown");
    assert!(api.calls().is_empty());
}
