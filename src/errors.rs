//! Error types for DigitalOcean API operations

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

use crate::client::Response;

/// Errors that can occur while talking to the DigitalOcean API
#[derive(Debug, Error)]
pub enum DigitalOceanError {
    /// The request could not be constructed; nothing was sent
    #[error("Invalid request: {0}")]
    Request(String),

    /// Connection, DNS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the expected shape
    #[error("Failed to decode response ({status}): {source}", status = .response.status)]
    Decode {
        response: Response,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DigitalOceanError {
    /// Response metadata attached to the error, if the server answered at all
    pub fn response(&self) -> Option<&Response> {
        match self {
            DigitalOceanError::Api(err) => Some(&err.response),
            DigitalOceanError::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, if any
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.response().map(|r| r.status)
    }

    /// True when the API reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::NOT_FOUND)
    }
}

/// Result type for DigitalOcean API operations
pub type DigitalOceanResult<T> = Result<T, DigitalOceanError>;

/// Error reported by the API in a non-2xx response
#[derive(Debug)]
pub struct ApiError {
    /// Response metadata of the failed request
    pub response: Response,
    /// Machine readable error id, e.g. "not_found"
    pub id: String,
    /// Human readable message
    pub message: String,
    /// Request id reported in the body, if any
    pub request_id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.response.method, self.response.url, self.response.status, self.message
        )?;
        if let Some(request_id) = &self.request_id {
            write!(f, " (request {:?})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Wire shape of the API error body
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Build an error from the raw body of a failed response.
    ///
    /// Bodies that are not the documented JSON shape keep their text as the
    /// message so nothing the server said is lost.
    pub(crate) fn from_body(response: Response, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_else(|_| ErrorBody {
            message: String::from_utf8_lossy(body).trim().to_string(),
            ..ErrorBody::default()
        });

        let message = if parsed.message.is_empty() {
            response
                .status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            parsed.message
        };

        let request_id = parsed
            .request_id
            .filter(|id| !id.is_empty())
            .or_else(|| response.request_id().map(str::to_string));

        Self {
            response,
            id: parsed.id,
            message,
            request_id,
        }
    }
}
