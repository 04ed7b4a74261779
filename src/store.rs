//! Host record storage consumed by the resolution core.
//!
//! The backend reads records through the [`RecordStore`] trait. The write
//! path that registers or refreshes dynamic-DNS entries lives behind a
//! separate management interface; [`MemoryStore`] only exposes mutators so
//! the binary can seed records from configuration and tests can set up
//! fixtures.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::metrics;
use crate::resolver::normalize_name;

/// A dynamic-DNS host entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Hostname the record answers for, stored normalized (ASCII
    /// lower-case, no trailing dot) so lookups are a pure equality match.
    pub hostname: String,
    /// DNS record type mnemonic (A, AAAA, CNAME, ...).
    pub record_type: String,
    /// Record payload: target IP or canonical name.
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Priority for MX-like types, 0 otherwise.
    #[serde(default)]
    pub priority: u16,
}

/// Errors surfaced by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached or queried.
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Read interface the resolution core depends on.
pub trait RecordStore: Send + Sync {
    /// Fetch all records whose normalized hostname equals `hostname`.
    ///
    /// Returns records in a stable, deterministic order; an empty vec (not
    /// an error) means nothing matched. A read observes a consistent,
    /// possibly stale, never torn snapshot of the records.
    fn find_by_hostname(&self, hostname: &str) -> Result<Vec<HostRecord>, StoreError>;
}

/// Thread-safe in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    /// hostname -> records in insertion order
    records: HashMap<String, Vec<HostRecord>>,
}

impl MemoryStoreInner {
    fn total(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given records.
    pub fn with_records(records: impl IntoIterator<Item = HostRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    /// Insert or refresh a record.
    ///
    /// The hostname is normalized on the way in. An existing record with
    /// the same hostname and type is replaced in place, preserving its
    /// position, so insertion order stays stable across refreshes.
    pub fn upsert(&self, mut record: HostRecord) {
        record.hostname = normalize_name(&record.hostname);

        let mut inner = self.inner.write();
        debug!(
            hostname = %record.hostname,
            record_type = %record.record_type,
            content = %record.content,
            "upserting record"
        );

        let entries = inner.records.entry(record.hostname.clone()).or_default();
        match entries
            .iter()
            .position(|r| r.record_type == record.record_type)
        {
            Some(idx) => entries[idx] = record,
            None => entries.push(record),
        }

        metrics::record_store_records(inner.total());
    }

    /// Remove all records for a hostname.
    pub fn remove(&self, hostname: &str) {
        let mut inner = self.inner.write();
        if inner.records.remove(&normalize_name(hostname)).is_some() {
            debug!(hostname, "removed records");
            metrics::record_store_records(inner.total());
        }
    }

    /// Total record count across all hostnames.
    pub fn record_count(&self) -> usize {
        self.inner.read().total()
    }

    /// Count of distinct hostnames with at least one record.
    pub fn hostname_count(&self) -> usize {
        self.inner.read().records.len()
    }
}

impl RecordStore for MemoryStore {
    fn find_by_hostname(&self, hostname: &str) -> Result<Vec<HostRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.records.get(hostname).cloned().unwrap_or_default())
    }
}
