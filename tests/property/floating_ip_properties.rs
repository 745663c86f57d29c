// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Floating IP Requests and Payloads
//!
//! These tests check properties of request construction and payload
//! encoding that must hold for every input, not just the documented
//! examples. None of them touch the network.

use cim_infrastructure_digitalocean::{
    Client, ClientConfig, Droplet, FloatingIp, FloatingIpCreateRequest, ListOptions, Region,
    ResourceWithUrn,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

fn offline_client() -> Client {
    Client::new(ClientConfig::new("test-token").with_base_url("http://127.0.0.1:9/")).unwrap()
}

fn region() -> impl Strategy<Value = Region> {
    (
        "[a-z]{3}[0-9]",
        "[A-Za-z ]{1,20}",
        prop::collection::vec("s-[0-9]vcpu-[0-9]gb", 0..4),
        any::<bool>(),
        prop::collection::vec("[a-z_]{2,12}", 0..4),
    )
        .prop_map(|(slug, name, sizes, available, features)| Region {
            slug,
            name,
            sizes,
            available,
            features,
            ..Region::default()
        })
}

fn droplet() -> impl Strategy<Value = Droplet> {
    (
        1u64..u64::MAX,
        "[a-z][a-z0-9-]{0,20}",
        prop::option::of(region()),
        any::<bool>(),
        prop::option::of(0i64..2_000_000_000),
    )
        .prop_map(|(id, name, region, locked, created)| Droplet {
            id,
            name,
            region,
            locked: Some(locked),
            status: Some("active".to_string()),
            created_at: created.and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
            ..Droplet::default()
        })
}

fn ip_address() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<std::net::Ipv4Addr>().prop_map(|ip| ip.to_string()),
        any::<std::net::Ipv6Addr>().prop_map(|ip| ip.to_string()),
    ]
}

fn floating_ip() -> impl Strategy<Value = FloatingIp> {
    (
        prop::option::of(region()),
        prop::option::of(droplet()),
        ip_address(),
        "[a-f0-9-]{0,36}",
        any::<bool>(),
    )
        .prop_map(|(region, droplet, ip, project_id, locked)| FloatingIp {
            region,
            droplet,
            ip,
            project_id,
            locked,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Encoding floating IPs and decoding the list payload gives
    /// back the same values, including absent region and droplet.
    #[test]
    fn prop_list_payload_round_trip(ips in prop::collection::vec(floating_ip(), 0..5)) {
        let payload = serde_json::json!({ "floating_ips": ips });
        let encoded = serde_json::to_string(&payload).unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        let decoded_ips: Vec<FloatingIp> =
            serde_json::from_value(decoded["floating_ips"].clone()).unwrap();

        prop_assert_eq!(&decoded_ips, &ips);

        for (value, ip) in decoded["floating_ips"].as_array().unwrap().iter().zip(&ips) {
            prop_assert_eq!(value["region"].is_null(), ip.region.is_none());
            prop_assert_eq!(value["droplet"].is_null(), ip.droplet.is_none());
        }
    }

    /// Property: URN derivation is pure and deterministic
    #[test]
    fn prop_urn_is_prefixed_ip(ip in "[^\\s]{1,45}") {
        let floating_ip = FloatingIp { ip: ip.clone(), ..FloatingIp::default() };
        prop_assert_eq!(floating_ip.urn(), format!("do:FloatingIP:{}", ip));
        prop_assert_eq!(floating_ip.urn(), floating_ip.clone().urn());
    }

    /// Property: List queries contain exactly the set options
    #[test]
    fn prop_list_query_is_exact(
        page in prop::option::of(1u32..10_000),
        per_page in prop::option::of(1u32..=200),
    ) {
        let client = offline_client();
        let mut url = client.floating_ips().collection_url().unwrap();
        ListOptions { page, per_page }.apply_to(&mut url).unwrap();

        let mut expected = Vec::new();
        if let Some(page) = page {
            expected.push(format!("page={}", page));
        }
        if let Some(per_page) = per_page {
            expected.push(format!("per_page={}", per_page));
        }

        let expected = expected.join("&");
        if expected.is_empty() {
            prop_assert_eq!(url.query(), None);
        } else {
            prop_assert_eq!(url.query(), Some(expected.as_str()));
        }
        prop_assert_eq!(url.path(), "/v2/floating_ips");
    }

    /// Property: Out of range pagination is rejected
    #[test]
    fn prop_out_of_range_per_page_rejected(per_page in 201u32..) {
        let client = offline_client();
        let mut url = client.floating_ips().collection_url().unwrap();
        prop_assert!(ListOptions::new().per_page(per_page).apply_to(&mut url).is_err());
        prop_assert_eq!(url.query(), None);
    }

    /// Property: The address path segment decodes back to the address, so it
    /// was encoded exactly once.
    #[test]
    fn prop_member_url_encodes_once(ip in "[^/]{1,40}".prop_filter("dot segment", |s| s != "." && s != "..")) {
        let client = offline_client();
        let url = client.floating_ips().member_url(&ip).unwrap();

        let segment = url.path().strip_prefix("/v2/floating_ips/").unwrap();
        prop_assert!(!segment.contains('/'));
        let decoded = urlencoding::decode(segment).unwrap();
        prop_assert_eq!(&*decoded, ip.as_str());
    }

    /// Property: Create bodies carry exactly the non-empty fields
    #[test]
    fn prop_create_body_omits_empty_fields(
        region in prop::option::of("[a-z0-9]{0,5}"),
        droplet_id in prop::option::of(0u64..1_000),
        project_id in prop::option::of("[a-f0-9-]{0,8}"),
    ) {
        let request = FloatingIpCreateRequest {
            region: region.clone(),
            droplet_id,
            project_id: project_id.clone(),
        };
        let body = serde_json::to_value(&request).unwrap();
        let keys: BTreeSet<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();

        let mut expected = BTreeSet::new();
        if region.as_deref().is_some_and(|r| !r.is_empty()) {
            expected.insert("region");
        }
        if droplet_id.is_some_and(|id| id != 0) {
            expected.insert("droplet_id");
        }
        if project_id.as_deref().is_some_and(|p| !p.is_empty()) {
            expected.insert("project_id");
        }

        prop_assert_eq!(keys, expected);
        prop_assert!(body.as_object().unwrap().values().all(|v| !v.is_null()));
    }
}
