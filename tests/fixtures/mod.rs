// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-digitalocean
//!
//! Fixed API payloads so request/response tests are reproducible. Addresses
//! come from the documentation range 203.0.113.0/24.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "dop_v1_test_token";

pub const TEST_IP: &str = "203.0.113.5";

// Fixed timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Region payload for nyc3
pub fn region_json() -> Value {
    json!({
        "slug": "nyc3",
        "name": "New York 3",
        "sizes": ["s-1vcpu-1gb", "s-2vcpu-2gb"],
        "available": true,
        "features": ["backups", "ipv6", "metadata"],
        "optimized": true
    })
}

/// Droplet payload with one public and one private interface, carrying the
/// image, size and volume members the API sends alongside them
pub fn droplet_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("web-{:02}", id % 100),
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": "active",
        "created_at": FIXED_TIMESTAMP,
        "size_slug": "s-1vcpu-1gb",
        "kernel": null,
        "next_backup_window": null,
        "backup_ids": [],
        "snapshot_ids": [],
        "volume_ids": ["506f78a4-e098-11e5-ad9f-000f53306ae1"],
        "features": ["monitoring", "ipv6"],
        "image": {
            "id": 63663980,
            "name": "20.04 (LTS) x64",
            "distribution": "Ubuntu",
            "slug": "ubuntu-20-04-x64",
            "public": true,
            "regions": ["nyc3"],
            "min_disk_size": 20
        },
        "size": {
            "slug": "s-1vcpu-1gb",
            "memory": 1024,
            "vcpus": 1,
            "disk": 25,
            "transfer": 1,
            "regions": ["nyc3"],
            "available": true
        },
        "region": region_json(),
        "tags": ["web"],
        "vpc_uuid": "760e09ef-dc84-11e8-981e-3cfdfeaae000",
        "networks": {
            "v4": [
                {"ip_address": "10.128.192.124", "netmask": "255.255.0.0", "gateway": "10.128.0.1", "type": "private"},
                {"ip_address": "192.0.2.10", "netmask": "255.255.255.0", "gateway": "192.0.2.1", "type": "public"}
            ],
            "v6": []
        }
    })
}

/// Unassigned floating IP reserved in nyc3
pub fn floating_ip_json(ip: &str) -> Value {
    json!({
        "ip": ip,
        "region": region_json(),
        "droplet": null,
        "locked": false,
        "project_id": "746c6152-2fa2-11ed-92d3-27aaa54e4988"
    })
}

/// Floating IP attached to a droplet
pub fn assigned_floating_ip_json(ip: &str, droplet_id: u64) -> Value {
    json!({
        "ip": ip,
        "region": region_json(),
        "droplet": droplet_json(droplet_id),
        "locked": true,
        "project_id": "746c6152-2fa2-11ed-92d3-27aaa54e4988"
    })
}
