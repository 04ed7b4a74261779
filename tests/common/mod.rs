//! Shared test infrastructure for the remote-backend protocol tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use ddns_backend::config::{BackendConfig, SoaConfig};
use ddns_backend::server::{router, AppState};
use ddns_backend::store::{HostRecord, MemoryStore, RecordStore, StoreError};

// --- Constants ---

pub const ZONE_APEX: &str = "dyn.example.com";

// --- Config builders ---

pub fn test_backend_config() -> BackendConfig {
    BackendConfig {
        listen_addr: "127.0.0.1:8057".parse().unwrap(),
        domain: ZONE_APEX.to_string(),
        ttl: 60,
        records: Vec::new(),
        soa: SoaConfig::default(),
    }
}

// --- Record builders ---

pub fn make_record(hostname: &str, record_type: &str, content: &str) -> HostRecord {
    HostRecord {
        hostname: hostname.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 60,
        priority: 0,
    }
}

// --- App builders ---

/// Build a router over an in-memory store seeded with `records`.
pub fn build_app(records: Vec<HostRecord>) -> Router {
    let store = Arc::new(MemoryStore::with_records(records));
    router(AppState::new(test_backend_config(), store))
}

/// Build a router over an arbitrary store implementation.
pub fn build_app_with_store(store: Arc<dyn RecordStore>) -> Router {
    router(AppState::new(test_backend_config(), store))
}

/// Store that fails every read, for exercising the outage path.
pub struct DownStore;

impl RecordStore for DownStore {
    fn find_by_hostname(&self, _hostname: &str) -> Result<Vec<HostRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

// --- Request helpers ---

/// GET a path and return the parsed JSON body.
///
/// Asserts the protocol's blanket status contract: every response is
/// HTTP 200, success or not.
pub async fn get_json(app: Router, path: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
