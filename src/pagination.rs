// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pagination for list endpoints
//!
//! List requests take [`ListOptions`] as query parameters. List responses
//! carry [`Links`] and [`Meta`] in their envelope, which the client copies
//! into the returned [`Response`](crate::client::Response) so callers can
//! walk subsequent pages:
//!
//! ```rust,no_run
//! use cim_infrastructure_digitalocean::{Client, ClientConfig, FloatingIpsService, ListOptions};
//!
//! # async fn walk() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let mut opts = ListOptions::new().per_page(50);
//! loop {
//!     let (ips, response) = client.floating_ips().list(Some(&opts)).await?;
//!     println!("{} floating IPs on this page", ips.len());
//!     match response.links.as_ref().and_then(|l| l.next_page_options()) {
//!         Some(next) => opts = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::{DigitalOceanError, DigitalOceanResult};

/// Largest page size the API accepts
pub const MAX_PER_PAGE: u32 = 200;

const LINK_ORIGIN: &str = "https://api.digitalocean.com/";

/// Query parameters for paginated list requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// 1-based page to fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to fetch
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Check the options against the ranges the API accepts
    pub fn validate(&self) -> DigitalOceanResult<()> {
        if self.page == Some(0) {
            return Err(DigitalOceanError::Request(
                "page must be at least 1".to_string(),
            ));
        }

        if let Some(per_page) = self.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(DigitalOceanError::Request(format!(
                    "per_page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, per_page
                )));
            }
        }

        Ok(())
    }

    /// Append the options to `url` as query parameters.
    ///
    /// Only set options are written, `page` before `per_page`.
    pub fn apply_to(&self, url: &mut Url) -> DigitalOceanResult<()> {
        self.validate()?;

        let pairs: Vec<(&str, String)> = [("page", self.page), ("per_page", self.per_page)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .collect();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(())
    }
}

/// Pagination links returned by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<LinkAction>,
}

/// URLs of the neighbouring pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Link to an action started by a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAction {
    pub id: u64,
    pub rel: String,
    pub href: String,
}

/// Result set metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of items across all pages
    #[serde(default)]
    pub total: u64,
}

impl Links {
    /// True when there is no next page to fetch.
    ///
    /// A `next` link that carries no usable page number counts as absent, so
    /// this always agrees with [`Links::next_page_options`].
    pub fn is_last_page(&self) -> bool {
        self.next_page_options().is_none()
    }

    /// Page number the links were returned for
    pub fn current_page(&self) -> DigitalOceanResult<u32> {
        let Some(pages) = &self.pages else {
            return Ok(1);
        };

        match non_empty(&pages.prev) {
            Some(prev) => Ok(page_for_url(prev)? + 1),
            None => Ok(1),
        }
    }

    /// Options fetching the page after this one, keeping its page size
    pub fn next_page_options(&self) -> Option<ListOptions> {
        let next = non_empty(&self.pages.as_ref()?.next)?;
        let url = parse_link(next).ok()?;

        let mut opts = ListOptions::new();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "page" => opts.page = value.parse().ok(),
                "per_page" => opts.per_page = value.parse().ok(),
                _ => {}
            }
        }

        opts.page.map(|_| opts)
    }
}

fn non_empty(link: &Option<String>) -> Option<&str> {
    link.as_deref().filter(|s| !s.is_empty())
}

/// Parse a page link. Relative links are resolved against a placeholder
/// origin, since only their query is read.
fn parse_link(link: &str) -> DigitalOceanResult<Url> {
    Url::parse(link)
        .or_else(|_| Url::parse(LINK_ORIGIN).and_then(|origin| origin.join(link)))
        .map_err(|e| DigitalOceanError::Request(format!("Invalid page link {}: {}", link, e)))
}

/// Extract the `page` query parameter of a page link; a link without one
/// points at the first page.
fn page_for_url(link: &str) -> DigitalOceanResult<u32> {
    let url = parse_link(link)?;

    match url.query_pairs().find(|(key, _)| key == "page") {
        Some((_, page)) => page.parse().map_err(|_| {
            DigitalOceanError::Request(format!("Invalid page number in link {}", link))
        }),
        None => Ok(1),
    }
}
