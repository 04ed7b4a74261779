//! ddns-backend - HTTP lookup backend serving a dynamic-DNS zone to an
//! authoritative DNS server.
//!
//! The DNS server daemon delegates resolution for one dynamic-DNS zone to
//! this backend over a JSON-over-HTTP protocol: it asks for a query name
//! and type, and the backend answers with a matching host record or an
//! explicit "no match". Host records come from a pluggable record store;
//! the backend itself stays stateless per lookup.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         ddns-backend                           │
//! │                                                                │
//! │   GET /dnsapi/...   ┌──────────────────┐   ┌───────────────┐   │
//! │  ◀─────────────────▶│ Transport Adapter│──▶│   Resolver    │   │
//! │   (authoritative    │  (axum router)   │   │ (lookup core) │   │
//! │    DNS server)      └──────────────────┘   └───────┬───────┘   │
//! │                                                    │           │
//! │                                                    ▼           │
//! │                                            ┌───────────────┐   │
//! │                                            │  RecordStore  │   │
//! │                                            │ (host records)│   │
//! │                                            └───────────────┘   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution rules
//!
//! - Query names are normalized (one trailing dot stripped, ASCII
//!   lower-cased) and matched against stored hostnames by equality.
//! - `ANY` matches any stored type; other types must match exactly.
//! - An SOA query for the zone apex is answered with a synthesized record,
//!   so the zone is authoritative even with zero registered hosts.
//! - "No match" is a valid outcome, reported on the wire as
//!   `{"result": false}`; only a record store failure is an error, and it
//!   collapses to the same wire shape.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use ddns_backend::{Backend, BackendConfig, MemoryStore, SoaConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = BackendConfig {
//!         listen_addr: "127.0.0.1:8057".parse().unwrap(),
//!         domain: "dyn.example.com".to_string(),
//!         ttl: 60,
//!         records: Vec::new(),
//!         soa: SoaConfig::default(),
//!     };
//!
//!     let store = Arc::new(MemoryStore::new());
//!     Backend::new(config, store).run().await.unwrap();
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod server;
pub mod store;
pub mod telemetry;
pub mod zone;

// Re-export main types
pub use config::{BackendConfig, Config, SoaConfig, TelemetryConfig};
pub use error::BackendError;
pub use resolver::{Answer, LookupOutcome, Query, Resolver};
pub use server::Backend;
pub use store::{HostRecord, MemoryStore, RecordStore, StoreError};
