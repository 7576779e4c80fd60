#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use feedbin_tools::{FeedbinClient, FeedbinConfig, ToolRegistry, tools};

/// Entry id the mock upstream knows about; anything else is a 404.
pub const KNOWN_ENTRY_ID: i64 = 101;

/// In-process stand-in for the Feedbin API.
///
/// Records every request it sees and keeps the unread/starred id sets in
/// memory so the mark/star round trips behave like the real service.
#[derive(Clone, Default)]
pub struct MockFeedbin {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    pub unread: Arc<Mutex<BTreeSet<i64>>>,
    pub starred: Arc<Mutex<BTreeSet<i64>>>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Option<Value>,
}

impl MockFeedbin {
    fn record(&self, method: &Method, uri: &Uri, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().unwrap_or_default().to_string(),
            body,
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no requests recorded")
    }

    pub fn unread_ids(&self) -> Vec<i64> {
        self.unread.lock().unwrap().iter().copied().collect()
    }

    pub fn starred_ids(&self) -> Vec<i64> {
        self.starred.lock().unwrap().iter().copied().collect()
    }

    pub fn seed_unread(&self, ids: &[i64]) {
        self.unread.lock().unwrap().extend(ids.iter().copied());
    }

    pub fn seed_starred(&self, ids: &[i64]) {
        self.starred.lock().unwrap().extend(ids.iter().copied());
    }
}

pub struct MockFeedbinServer {
    pub state: MockFeedbin,
    pub base_url: String,
}

/// Start the mock upstream on an ephemeral port.
pub async fn start_mock_feedbin() -> MockFeedbinServer {
    let state = MockFeedbin::default();
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock feedbin");
    let addr = listener.local_addr().expect("mock feedbin addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock feedbin");
    });

    MockFeedbinServer {
        state,
        base_url: format!("http://{}/v2", addr),
    }
}

pub fn test_config(base_url: &str) -> FeedbinConfig {
    FeedbinConfig::new("user@example.com", "secret").with_base_url(base_url)
}

pub fn test_client(base_url: &str) -> FeedbinClient {
    FeedbinClient::new(test_config(base_url))
}

pub fn test_registry(base_url: &str) -> ToolRegistry {
    tools::registry(Arc::new(test_client(base_url)))
}

/// Decode a raw query string into its key/value pairs.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Entry document with a deliberate field order, for fidelity assertions.
pub fn entry_doc(id: i64) -> Value {
    json!({
        "id": id,
        "feed_id": 7,
        "title": "An article",
        "author": "someone",
        "summary": "short text",
        "content": "<p>full body</p>",
        "url": "https://example.com/article",
        "published": "2024-05-01T10:00:00.000000Z",
        "created_at": "2024-05-01T10:05:00.000000Z"
    })
}

fn router(state: MockFeedbin) -> Router {
    Router::new()
        .route("/v2/subscriptions.json", get(subscriptions))
        .route("/v2/feeds/:feed", get(feed))
        .route("/v2/feeds/:feed/entries.json", get(feed_entries))
        .route("/v2/entries.json", get(entries))
        .route("/v2/entries/:entry", get(entry))
        .route(
            "/v2/unread_entries.json",
            get(unread_entries)
                .post(unread_entries)
                .delete(unread_entries),
        )
        .route(
            "/v2/starred_entries.json",
            get(starred_entries)
                .post(starred_entries)
                .delete(starred_entries),
        )
        .route("/v2/tags.json", get(tags))
        .route("/v2/taggings.json", get(taggings))
        .with_state(state)
}

/// Strip the ".json" suffix Feedbin puts on path ids.
fn parse_json_id(segment: &str) -> Option<i64> {
    segment.strip_suffix(".json")?.parse().ok()
}

fn ids_in_body(body: &Option<Value>, key: &str) -> Vec<i64> {
    body.as_ref()
        .and_then(|v| v[key].as_array().cloned())
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_i64)
        .collect()
}

async fn subscriptions(
    State(state): State<MockFeedbin>,
    method: Method,
    uri: Uri,
) -> Json<Value> {
    state.record(&method, &uri, None);
    Json(json!([
        {
            "id": 5,
            "feed_id": 7,
            "title": "Example Feed",
            "feed_url": "https://example.com/feed.xml",
            "site_url": "https://example.com",
            "created_at": "2024-04-01T08:00:00.000000Z"
        }
    ]))
}

async fn feed(
    State(state): State<MockFeedbin>,
    Path(feed): Path<String>,
    method: Method,
    uri: Uri,
) -> Response {
    state.record(&method, &uri, None);
    match parse_json_id(&feed) {
        Some(id) => Json(json!({
            "id": id,
            "title": "Example Feed",
            "feed_url": "https://example.com/feed.xml",
            "site_url": "https://example.com"
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "Record not found").into_response(),
    }
}

async fn entries(State(state): State<MockFeedbin>, method: Method, uri: Uri) -> Json<Value> {
    state.record(&method, &uri, None);
    Json(json!([entry_doc(1), entry_doc(2)]))
}

async fn feed_entries(
    State(state): State<MockFeedbin>,
    Path(_feed): Path<String>,
    method: Method,
    uri: Uri,
) -> Json<Value> {
    state.record(&method, &uri, None);
    Json(json!([entry_doc(1)]))
}

async fn entry(
    State(state): State<MockFeedbin>,
    Path(entry): Path<String>,
    method: Method,
    uri: Uri,
) -> Response {
    state.record(&method, &uri, None);
    match parse_json_id(&entry) {
        Some(id) if id == KNOWN_ENTRY_ID => Json(entry_doc(id)).into_response(),
        _ => (StatusCode::NOT_FOUND, "Record not found").into_response(),
    }
}

async fn unread_entries(
    State(state): State<MockFeedbin>,
    method: Method,
    uri: Uri,
    body: Option<Json<Value>>,
) -> Json<Value> {
    let body = body.map(|Json(v)| v);
    state.record(&method, &uri, body.clone());

    let mut unread = state.unread.lock().unwrap();
    if method == Method::POST {
        for id in ids_in_body(&body, "unread_entries") {
            unread.insert(id);
        }
    } else if method == Method::DELETE {
        for id in ids_in_body(&body, "unread_entries") {
            unread.remove(&id);
        }
    }

    Json(json!(unread.iter().copied().collect::<Vec<i64>>()))
}

async fn starred_entries(
    State(state): State<MockFeedbin>,
    method: Method,
    uri: Uri,
    body: Option<Json<Value>>,
) -> Json<Value> {
    let body = body.map(|Json(v)| v);
    state.record(&method, &uri, body.clone());

    let mut starred = state.starred.lock().unwrap();
    if method == Method::POST {
        for id in ids_in_body(&body, "starred_entries") {
            starred.insert(id);
        }
    } else if method == Method::DELETE {
        for id in ids_in_body(&body, "starred_entries") {
            starred.remove(&id);
        }
    }

    Json(json!(starred.iter().copied().collect::<Vec<i64>>()))
}

async fn tags(State(state): State<MockFeedbin>, method: Method, uri: Uri) -> Json<Value> {
    state.record(&method, &uri, None);
    Json(json!([{ "id": 2, "name": "Tech" }]))
}

async fn taggings(State(state): State<MockFeedbin>, method: Method, uri: Uri) -> Json<Value> {
    state.record(&method, &uri, None);
    Json(json!([{ "id": 3, "feed_id": 7, "name": "Tech" }]))
}
