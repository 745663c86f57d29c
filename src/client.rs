// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared HTTP transport for the DigitalOcean API
//!
//! [`Client`] owns the connection settings and the `reqwest` client. Resource
//! services borrow it, build a request with [`Client::new_request`] or
//! [`Client::new_json_request`], and hand it back to [`Client::send`] (JSON
//! response) or [`Client::send_empty`] (no body expected).
//!
//! Every exchange that reached the server yields a [`Response`], also on
//! failure: API errors and decode errors carry it so the HTTP status and
//! headers stay available to the caller.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::errors::{ApiError, DigitalOceanError, DigitalOceanResult};
use crate::floating_ips::FloatingIpsServiceOp;
use crate::pagination::{Links, Meta};

const MEDIA_TYPE: &str = "application/json";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Transport metadata of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct Response {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Pagination links, when the endpoint returns them
    pub links: Option<Links>,
    /// Result set metadata, when the endpoint returns it
    pub meta: Option<Meta>,
}

impl Response {
    pub fn new(method: Method, url: Url, status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            status,
            headers,
            links: None,
            meta: None,
        }
    }

    /// Server assigned request id, useful when reporting problems
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}

/// DigitalOcean API client
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> DigitalOceanResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| DigitalOceanError::Configuration(format!("Invalid API token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                DigitalOceanError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("DigitalOcean client configured for {}", base_url);

        Ok(Self { http, base_url })
    }

    /// API base URL, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Floating IP endpoints
    pub fn floating_ips(&self) -> FloatingIpsServiceOp<'_> {
        FloatingIpsServiceOp::new(self)
    }

    /// Resolve an API path such as `v2/floating_ips` against the base URL.
    ///
    /// The path must already be percent-encoded; it is not encoded again.
    pub fn resolve(&self, path: &str) -> DigitalOceanResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DigitalOceanError::Request(format!("Invalid path {:?}: {}", path, e)))
    }

    /// Build a request without a body
    pub fn new_request(&self, method: Method, url: Url) -> DigitalOceanResult<reqwest::Request> {
        self.http
            .request(method, url)
            .build()
            .map_err(|e| DigitalOceanError::Request(e.to_string()))
    }

    /// Build a request with `body` encoded as JSON
    pub fn new_json_request<B>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> DigitalOceanResult<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| DigitalOceanError::Request(format!("Failed to encode body: {}", e)))?;

        self.http
            .request(method, url)
            .body(payload)
            .build()
            .map_err(|e| DigitalOceanError::Request(e.to_string()))
    }

    /// Send a request and decode its JSON body
    pub async fn send<T>(&self, request: reqwest::Request) -> DigitalOceanResult<(T, Response)>
    where
        T: DeserializeOwned,
    {
        let (response, body) = self.dispatch(request).await?;

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok((value, response)),
            Err(source) => {
                warn!("Failed to decode {} {}: {}", response.method, response.url, source);
                Err(DigitalOceanError::Decode { response, source })
            }
        }
    }

    /// Send a request whose response body is not needed
    pub async fn send_empty(&self, request: reqwest::Request) -> DigitalOceanResult<Response> {
        let (response, _) = self.dispatch(request).await?;
        Ok(response)
    }

    async fn dispatch(&self, request: reqwest::Request) -> DigitalOceanResult<(Response, Vec<u8>)> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let http_response = self.http.execute(request).await?;
        let status = http_response.status();
        let headers = http_response.headers().clone();
        let body = http_response.bytes().await?;

        debug!("{} {} -> {}", method, url, status);
        let response = Response::new(method, url, status, headers);

        if !status.is_success() {
            let err = ApiError::from_body(response, &body);
            warn!("DigitalOcean API error: {}", err);
            return Err(err.into());
        }

        Ok((response, body.to_vec()))
    }
}

fn parse_base_url(base_url: &str) -> DigitalOceanResult<Url> {
    let mut url = Url::parse(base_url).map_err(|e| {
        DigitalOceanError::Configuration(format!("Invalid base URL {:?}: {}", base_url, e))
    })?;

    if url.cannot_be_a_base() {
        return Err(DigitalOceanError::Configuration(format!(
            "Base URL {:?} cannot carry a path",
            base_url
        )));
    }

    // Url::join drops the last segment of a path without a trailing slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
