//! Protocol tests for the lookup endpoint.
//!
//! Drives the router in-process and checks the exact JSON bodies the
//! authoritative DNS server consumes.

mod common;

use serde_json::json;
use std::sync::Arc;

use common::*;
use ddns_backend::store::HostRecord;

#[tokio::test]
async fn test_lookup_returns_matching_record() {
    let app = build_app(vec![make_record("home.dyn.example.com", "A", "1.2.3.4")]);

    let body = get_json(app, "/dnsapi/lookup/home.dyn.example.com/A").await;

    assert_eq!(
        body,
        json!({
            "result": [{
                "qname": "home.dyn.example.com",
                "qtype": "A",
                "content": "1.2.3.4",
                "ttl": 60,
                "priority": 0
            }]
        })
    );
}

#[tokio::test]
async fn test_lookup_trailing_dot_and_case_resolve_identically() {
    let app = build_app(vec![make_record("home.dyn.example.com", "A", "1.2.3.4")]);

    let plain = get_json(app.clone(), "/dnsapi/lookup/home.dyn.example.com/A").await;
    let dotted = get_json(app, "/dnsapi/lookup/Home.DYN.Example.com./A").await;

    assert_eq!(plain, dotted);
    assert!(plain["result"].is_array());
}

#[tokio::test]
async fn test_lookup_type_mismatch_is_no_result() {
    let app = build_app(vec![make_record("home.dyn.example.com", "A", "1.2.3.4")]);

    let body = get_json(app, "/dnsapi/lookup/home.dyn.example.com/AAAA").await;

    assert_eq!(body, json!({ "result": false }));
}

#[tokio::test]
async fn test_lookup_any_matches_stored_type() {
    let app = build_app(vec![make_record("home.dyn.example.com", "AAAA", "fd00::1")]);

    let body = get_json(app, "/dnsapi/lookup/home.dyn.example.com/ANY").await;

    assert_eq!(body["result"][0]["qtype"], "AAAA");
    assert_eq!(body["result"][0]["content"], "fd00::1");
}

#[tokio::test]
async fn test_lookup_unknown_name_is_no_result() {
    let app = build_app(vec![make_record("home.dyn.example.com", "A", "1.2.3.4")]);

    let body = get_json(app, "/dnsapi/lookup/other.dyn.example.com/A").await;

    assert_eq!(body, json!({ "result": false }));
}

#[tokio::test]
async fn test_lookup_cname_answer_carries_target_name() {
    let app = build_app(vec![make_record(
        "alias.dyn.example.com",
        "CNAME",
        "home.dyn.example.com",
    )]);

    let body = get_json(app, "/dnsapi/lookup/alias.dyn.example.com/CNAME").await;

    assert_eq!(body["result"][0]["qtype"], "CNAME");
    assert_eq!(body["result"][0]["content"], "home.dyn.example.com");
}

#[tokio::test]
async fn test_lookup_mx_priority_passes_through() {
    let app = build_app(vec![HostRecord {
        hostname: "dyn.example.com".to_string(),
        record_type: "MX".to_string(),
        content: "mail.example.com".to_string(),
        ttl: 300,
        priority: 10,
    }]);

    let body = get_json(app, "/dnsapi/lookup/dyn.example.com/MX").await;

    assert_eq!(body["result"][0]["priority"], 10);
    assert_eq!(body["result"][0]["ttl"], 300);
}

#[tokio::test]
async fn test_lookup_soa_apex_answered_with_empty_store() {
    let app = build_app(Vec::new());

    let body = get_json(app, "/dnsapi/lookup/dyn.example.com/SOA").await;

    assert_eq!(body["result"][0]["qname"], ZONE_APEX);
    assert_eq!(body["result"][0]["qtype"], "SOA");
    assert_eq!(
        body["result"][0]["content"],
        "ns1.example.com admin.example.com 2 3600 600 604800 60"
    );
}

#[tokio::test]
async fn test_lookup_soa_apex_with_trailing_dot() {
    let app = build_app(Vec::new());

    let body = get_json(app, "/dnsapi/lookup/dyn.example.com./SOA").await;

    assert_eq!(body["result"][0]["qtype"], "SOA");
}

#[tokio::test]
async fn test_lookup_soa_below_apex_is_no_result() {
    let app = build_app(Vec::new());

    let body = get_json(app, "/dnsapi/lookup/home.dyn.example.com/SOA").await;

    assert_eq!(body, json!({ "result": false }));
}

#[tokio::test]
async fn test_lookup_store_outage_looks_like_no_result_on_the_wire() {
    let app = build_app_with_store(Arc::new(DownStore));

    let body = get_json(app, "/dnsapi/lookup/home.dyn.example.com/A").await;

    assert_eq!(body, json!({ "result": false }));
}
