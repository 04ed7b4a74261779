//! Zone descriptor and metadata responses for the DNS server's
//! housekeeping calls.
//!
//! These are constant-shape replies independent of any stored state; the
//! only dynamic field is the timestamp placed into `last_check`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::BackendConfig;
use crate::resolver::normalize_name;

/// Serial reported for the zone, in both the descriptor and the
/// synthesized SOA content.
///
/// Constant sentinel: a native zone never undergoes serial-based
/// master/slave sync, so the value never has to move.
pub const ZONE_SERIAL: u32 = 2;

/// Zone descriptor returned by `getAllDomains`.
#[derive(Debug, Clone, Serialize)]
pub struct DomainInfo {
    /// Zone identifier; there is only ever one zone.
    pub id: u32,
    /// Zone name as FQDN with trailing dot.
    pub zone: String,
    /// Secondary masters; always empty for a native zone.
    pub masters: Vec<String>,
    /// Serial last notified to secondaries.
    pub notified_serial: u32,
    /// Current zone serial.
    pub serial: u32,
    /// Unix timestamp of this metadata request.
    pub last_check: i64,
    /// Zone kind; always "native".
    pub kind: String,
}

/// Describe the configured zone.
///
/// Built fresh on every call and never cached; `last_check` carries the
/// current time.
pub fn describe_zone(config: &BackendConfig) -> DomainInfo {
    let last_check = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    DomainInfo {
        id: 1,
        zone: format!("{}.", normalize_name(&config.domain)),
        masters: Vec::new(),
        notified_serial: ZONE_SERIAL,
        serial: ZONE_SERIAL,
        last_check,
        kind: "native".to_string(),
    }
}

/// Per-kind metadata probe.
///
/// No metadata of any kind is configured; the reply is a fixed sentinel
/// regardless of `name` and `kind`.
pub fn metadata(_name: &str, _kind: &str) -> Vec<String> {
    vec!["0".to_string()]
}

/// All-kinds metadata probe.
///
/// The protocol only ever examines "PRESIGNED"; the sentinel value marks
/// the zone as not presigned.
pub fn all_metadata(_name: &str) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([("PRESIGNED".to_string(), vec!["0".to_string()])])
}
