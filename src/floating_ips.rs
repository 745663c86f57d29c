// Copyright (c) 2025 - Cowboy AI, Inc.

//! Floating IP endpoints
//!
//! A floating IP is a publicly routable address reserved in a region that can
//! be attached to, and moved between, droplets.
//!
//! ```text
//! list   = GET    /v2/floating_ips?page=&per_page=
//! get    = GET    /v2/floating_ips/{ip}
//! create = POST   /v2/floating_ips
//! delete = DELETE /v2/floating_ips/{ip}
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_digitalocean::{
//!     Client, ClientConfig, FloatingIpCreateRequest, FloatingIpsService,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::from_env()?)?;
//!
//!     let request = FloatingIpCreateRequest::in_region("nyc3");
//!     let (ip, _) = client.floating_ips().create(&request).await?;
//!     println!("reserved {}", ip.ip);
//!
//!     client.floating_ips().delete(&ip.ip).await?;
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::client::{Client, Response};
use crate::errors::{DigitalOceanError, DigitalOceanResult};
use crate::models::{Droplet, Region};
use crate::pagination::{Links, ListOptions, Meta};
use crate::urn::{to_urn, ResourceWithUrn};

/// Collection path, relative to the API base URL
pub const FLOATING_BASE_PATH: &str = "v2/floating_ips";

/// Resource type used in floating IP URNs
pub const FLOATING_IP_URN_TYPE: &str = "FloatingIP";

/// Operations on floating IPs.
///
/// [`FloatingIpsServiceOp`] talks to the API; tests can substitute any other
/// implementation.
#[async_trait]
pub trait FloatingIpsService: Send + Sync {
    /// List floating IPs, one page at a time
    async fn list(
        &self,
        opts: Option<&ListOptions>,
    ) -> DigitalOceanResult<(Vec<FloatingIp>, Response)>;

    /// Get a floating IP by address
    async fn get(&self, ip: &str) -> DigitalOceanResult<(FloatingIp, Response)>;

    /// Reserve a floating IP, attaching it when a droplet id is given
    async fn create(
        &self,
        request: &FloatingIpCreateRequest,
    ) -> DigitalOceanResult<(FloatingIp, Response)>;

    /// Release a floating IP
    async fn delete(&self, ip: &str) -> DigitalOceanResult<Response>;
}

/// A DigitalOcean floating IP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingIp {
    /// Region the address is reserved in
    pub region: Option<Region>,
    /// Droplet the address is attached to
    pub droplet: Option<Droplet>,
    /// The address itself; unique within the account
    pub ip: String,
    #[serde(default)]
    pub project_id: String,
    /// Set while an action on the address is in progress
    #[serde(default)]
    pub locked: bool,
}

impl FloatingIp {
    /// True when the address is attached to a droplet
    pub fn is_assigned(&self) -> bool {
        self.droplet.is_some()
    }
}

impl ResourceWithUrn for FloatingIp {
    fn urn(&self) -> String {
        to_urn(FLOATING_IP_URN_TYPE, &self.ip)
    }
}

impl fmt::Display for FloatingIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "FloatingIp{}", json)
    }
}

/// Request to reserve a floating IP.
///
/// Give a droplet id to reserve and attach the address in one step, or a
/// region to only reserve it. Empty fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingIpCreateRequest {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset_id")]
    pub droplet_id: Option<u64>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub project_id: Option<String>,
}

impl FloatingIpCreateRequest {
    /// Reserve an unattached address in `region`
    pub fn in_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    /// Reserve an address and attach it to `droplet_id`
    pub fn for_droplet(droplet_id: u64) -> Self {
        Self {
            droplet_id: Some(droplet_id),
            ..Self::default()
        }
    }

    /// Assign the address to a project
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_unset_id(value: &Option<u64>) -> bool {
    matches!(value, None | Some(0))
}

#[derive(Debug, Deserialize)]
struct FloatingIpsRoot {
    floating_ips: Vec<FloatingIp>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct FloatingIpRoot {
    floating_ip: FloatingIp,
    #[serde(default)]
    links: Option<Links>,
}

/// [`FloatingIpsService`] backed by the API
#[derive(Debug, Clone, Copy)]
pub struct FloatingIpsServiceOp<'a> {
    client: &'a Client,
}

impl<'a> FloatingIpsServiceOp<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL of the collection
    pub fn collection_url(&self) -> DigitalOceanResult<reqwest::Url> {
        self.client.resolve(FLOATING_BASE_PATH)
    }

    /// URL of a single floating IP
    pub fn member_url(&self, ip: &str) -> DigitalOceanResult<reqwest::Url> {
        self.client.resolve(&member_path(ip)?)
    }
}

/// Path of a single floating IP, with the address percent-encoded once
fn member_path(ip: &str) -> DigitalOceanResult<String> {
    // Dot segments would be normalised away by URL resolution, even encoded
    if matches!(ip, "" | "." | "..") {
        return Err(DigitalOceanError::Request(format!(
            "Invalid floating IP address {:?}",
            ip
        )));
    }

    Ok(format!("{}/{}", FLOATING_BASE_PATH, urlencoding::encode(ip)))
}

#[async_trait]
impl<'a> FloatingIpsService for FloatingIpsServiceOp<'a> {
    async fn list(
        &self,
        opts: Option<&ListOptions>,
    ) -> DigitalOceanResult<(Vec<FloatingIp>, Response)> {
        let mut url = self.collection_url()?;
        if let Some(opts) = opts {
            opts.apply_to(&mut url)?;
        }

        let request = self.client.new_request(Method::GET, url)?;
        let (root, mut response) = self.client.send::<FloatingIpsRoot>(request).await?;

        if let Some(links) = root.links {
            response.links = Some(links);
        }
        if let Some(meta) = root.meta {
            response.meta = Some(meta);
        }

        debug!("Listed {} floating IPs", root.floating_ips.len());
        Ok((root.floating_ips, response))
    }

    async fn get(&self, ip: &str) -> DigitalOceanResult<(FloatingIp, Response)> {
        let url = self.member_url(ip)?;
        let request = self.client.new_request(Method::GET, url)?;
        let (root, response) = self.client.send::<FloatingIpRoot>(request).await?;

        debug!("Fetched floating IP {}", root.floating_ip.ip);
        Ok((root.floating_ip, response))
    }

    async fn create(
        &self,
        request: &FloatingIpCreateRequest,
    ) -> DigitalOceanResult<(FloatingIp, Response)> {
        let url = self.collection_url()?;
        let http_request = self.client.new_json_request(Method::POST, url, request)?;
        let (root, mut response) = self.client.send::<FloatingIpRoot>(http_request).await?;

        if let Some(links) = root.links {
            response.links = Some(links);
        }

        info!("Created floating IP {}", root.floating_ip.ip);
        Ok((root.floating_ip, response))
    }

    async fn delete(&self, ip: &str) -> DigitalOceanResult<Response> {
        let url = self.member_url(ip)?;
        let request = self.client.new_request(Method::DELETE, url)?;
        let response = self.client.send_empty(request).await?;

        info!("Deleted floating IP {}", ip);
        Ok(response)
    }
}
