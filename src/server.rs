//! HTTP transport adapter and backend lifecycle.
//!
//! Pure plumbing around the resolution core: decode path parameters, call
//! the core, and map its outcomes onto the fixed JSON shapes the DNS
//! server expects. The wire contract encodes success and failure purely in
//! the body; the HTTP status is always 200.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info};

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::metrics;
use crate::resolver::{normalize_name, LookupOutcome, Query, Resolver};
use crate::store::RecordStore;
use crate::zone;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    resolver: Arc<Resolver>,
    config: Arc<BackendConfig>,
}

impl AppState {
    /// Compose the resolution core with its record store.
    pub fn new(config: BackendConfig, store: Arc<dyn RecordStore>) -> Self {
        let resolver = Arc::new(Resolver::new(&config, store));
        Self {
            resolver,
            config: Arc::new(config),
        }
    }
}

/// Build the router exposing the DNS server's remote-backend protocol.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dnsapi/lookup/{qname}/{qtype}", get(lookup))
        .route(
            "/dnsapi/getDomainMetadata/{name}/{kind}",
            get(get_domain_metadata),
        )
        .route(
            "/dnsapi/getAllDomainMetadata/{name}",
            get(get_all_domain_metadata),
        )
        .route("/dnsapi/getAllDomains", get(get_all_domains))
        .with_state(state)
}

async fn lookup(
    State(state): State<AppState>,
    Path((qname, qtype)): Path<(String, String)>,
) -> Json<Value> {
    let query = Query::new(qname, qtype);

    match state.resolver.resolve(&query) {
        Ok(LookupOutcome::Found(answer)) => Json(json!({ "result": [answer] })),
        Ok(LookupOutcome::NotFound) => {
            debug!(qname = %query.qname, qtype = %query.qtype, "no matching record");
            Json(json!({ "result": false }))
        }
        Err(e) => {
            // The querying DNS server cannot distinguish backend trouble
            // from a genuine miss; only the log does.
            error!(error = %e, qname = %query.qname, qtype = %query.qtype, "lookup failed");
            Json(json!({ "result": false }))
        }
    }
}

async fn get_domain_metadata(Path((name, kind)): Path<(String, String)>) -> Json<Value> {
    metrics::record_housekeeping("getDomainMetadata");
    Json(json!({ "result": zone::metadata(&name, &kind) }))
}

async fn get_all_domain_metadata(Path(name): Path<String>) -> Json<Value> {
    metrics::record_housekeeping("getAllDomainMetadata");
    Json(json!({ "result": zone::all_metadata(&name) }))
}

async fn get_all_domains(State(state): State<AppState>) -> Json<Value> {
    metrics::record_housekeeping("getAllDomains");
    let info = zone::describe_zone(&state.config);
    Json(json!({ "result": [info] }))
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            error!("Failed to listen for Ctrl+C: {}", e);
        });
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) = signal::unix::signal(signal::unix::SignalKind::terminate()) {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// HTTP backend answering lookups for the authoritative DNS server.
pub struct Backend {
    config: BackendConfig,
    store: Arc<dyn RecordStore>,
}

impl Backend {
    /// Create a new backend over the given record store.
    pub fn new(config: BackendConfig, store: Arc<dyn RecordStore>) -> Self {
        Self { config, store }
    }

    /// Run the backend until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<(), BackendError> {
        if normalize_name(&self.config.domain).is_empty() {
            return Err(BackendError::Config(
                "domain must not be empty".to_string(),
            ));
        }

        let listen_addr = self.config.listen_addr;
        let domain = self.config.domain.clone();
        let app = router(AppState::new(self.config, self.store));

        let listener = TcpListener::bind(listen_addr).await?;
        info!(addr = %listen_addr, domain = %domain, "backend HTTP listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("backend stopped");
        Ok(())
    }
}
