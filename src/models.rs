// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resources embedded in floating IP representations
//!
//! The droplet and region fields callers commonly rely on are typed. Every
//! other member of the payload is kept in `extra`, and optional members are
//! only written back when they were present, so a decoded resource encodes to
//! the JSON it was decoded from. Missing members decode to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A datacenter region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub sizes: Vec<String>,
    pub available: bool,
    pub features: Vec<String>,
    /// Members without a typed field
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A compute instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    /// Memory in MiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<u32>,
    /// Disk size in GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// "new", "active", "off" or "archive"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Networks>,
    /// Members without a typed field, such as `image`, `size` or `volume_ids`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Droplet {
    /// First public IPv4 address of the droplet
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks
            .as_ref()?
            .v4
            .iter()
            .find(|n| n.network_type == "public")
            .map(|n| n.ip_address.as_str())
    }
}

/// Network interfaces of a droplet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Networks {
    pub v4: Vec<NetworkV4>,
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV4 {
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    /// "public" or "private"
    #[serde(rename = "type")]
    pub network_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV6 {
    pub ip_address: String,
    pub netmask: u8,
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: String,
}
