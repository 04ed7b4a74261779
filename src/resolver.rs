//! Resolution core: decides which stored records answer a DNS query.
//!
//! All DNS-semantics decisions live here: name normalization, type
//! compatibility (exact match plus the `ANY` wildcard), the synthesized
//! SOA answer at the zone apex, and the typed not-found outcome.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::BackendConfig;
use crate::metrics::{self, LookupResult, Timer};
use crate::store::{RecordStore, StoreError};
use crate::zone::ZONE_SERIAL;

/// A single lookup request from the DNS server.
#[derive(Debug, Clone)]
pub struct Query {
    /// Query name, possibly mixed-case and with a trailing dot.
    pub qname: String,
    /// Upper-case DNS type mnemonic, or the wildcard "ANY".
    pub qtype: String,
}

impl Query {
    /// Build a query from raw protocol parameters.
    pub fn new(qname: impl Into<String>, qtype: impl Into<String>) -> Self {
        Self {
            qname: qname.into(),
            qtype: qtype.into(),
        }
    }
}

/// Wire-facing answer produced on a match.
///
/// Structurally a [`crate::store::HostRecord`], but decoupled so answers
/// with no backing record (SOA) can be synthesized. Field names are fixed
/// by the consuming protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Answered name, normalized (no trailing dot).
    pub qname: String,
    /// Record type of the answer.
    pub qtype: String,
    /// Record payload.
    pub content: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    /// Priority for MX-like types, 0 otherwise.
    pub priority: u16,
}

/// Outcome of a single resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A record (stored or synthesized) answers the query.
    Found(Answer),
    /// Nothing answers the query. A valid outcome, not a failure.
    NotFound,
}

/// Normalize a query name: strip one trailing dot if present and fold to
/// ASCII lower-case. Stored hostnames use the same form, so matching is a
/// pure equality check.
pub fn normalize_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// The resolution core.
///
/// Stateless per call: a pure function of the query and the current store
/// contents, safe under unbounded concurrent invocation.
pub struct Resolver {
    store: Arc<dyn RecordStore>,
    /// Zone apex in normalized form.
    apex: String,
    soa_content: String,
    soa_ttl: u32,
}

impl Resolver {
    /// Create a resolver for the configured zone over the given store.
    pub fn new(config: &BackendConfig, store: Arc<dyn RecordStore>) -> Self {
        let soa = &config.soa;
        let soa_content = format!(
            "{} {} {} {} {} {} {}",
            soa.mname, soa.rname, ZONE_SERIAL, soa.refresh, soa.retry, soa.expire, soa.minimum
        );

        Self {
            store,
            apex: normalize_name(&config.domain),
            soa_content,
            soa_ttl: config.ttl,
        }
    }

    /// Zone apex this resolver answers SOA queries for.
    pub fn apex(&self) -> &str {
        &self.apex
    }

    /// Resolve a single query against the record store.
    ///
    /// `NotFound` covers everything from unknown names to malformed ones;
    /// only a store failure surfaces as an error.
    pub fn resolve(&self, query: &Query) -> Result<LookupOutcome, StoreError> {
        let timer = Timer::start();
        let name = normalize_name(&query.qname);

        trace!(qname = %name, qtype = %query.qtype, "resolving query");

        // The apex SOA is synthesized, never stored, so the zone counts as
        // authoritative even with zero registered hosts.
        if query.qtype == "SOA" && name == self.apex {
            debug!(qname = %name, "synthesized SOA answer for zone apex");
            metrics::record_lookup(&query.qtype, LookupResult::SoaSynthesized, timer.elapsed());
            return Ok(LookupOutcome::Found(Answer {
                qname: self.apex.clone(),
                qtype: "SOA".to_string(),
                content: self.soa_content.clone(),
                ttl: self.soa_ttl,
                priority: 0,
            }));
        }

        let candidates = match self.store.find_by_hostname(&name) {
            Ok(records) => records,
            Err(e) => {
                metrics::record_lookup(&query.qtype, LookupResult::StoreError, timer.elapsed());
                return Err(e);
            }
        };

        // At most one record per (name, type) pair in normal operation;
        // duplicates are a data-entry anomaly, resolved by stored order.
        let wildcard = query.qtype == "ANY";
        let matched = candidates
            .into_iter()
            .find(|r| wildcard || r.record_type == query.qtype);

        match matched {
            Some(record) => {
                debug!(qname = %name, qtype = %record.record_type, content = %record.content, "lookup hit");
                metrics::record_lookup(&query.qtype, LookupResult::Found, timer.elapsed());
                Ok(LookupOutcome::Found(Answer {
                    qname: record.hostname,
                    qtype: record.record_type,
                    content: record.content,
                    ttl: record.ttl,
                    priority: record.priority,
                }))
            }
            None => {
                debug!(qname = %name, qtype = %query.qtype, "lookup miss");
                metrics::record_lookup(&query.qtype, LookupResult::NotFound, timer.elapsed());
                Ok(LookupOutcome::NotFound)
            }
        }
    }
}
