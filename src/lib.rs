//! DigitalOcean floating IP client for the Composable Information Machine
//!
//! This crate provides a typed, asynchronous binding for the floating IP
//! endpoints of the DigitalOcean API, together with the shared HTTP plumbing
//! (configuration, request construction, response metadata, pagination and
//! error decoding) it runs on.

pub mod client;
pub mod config;
pub mod errors;
pub mod floating_ips;
pub mod models;
pub mod pagination;
pub mod urn;

// Re-export commonly used types
pub use client::{Client, Response};
pub use config::ClientConfig;
pub use errors::{ApiError, DigitalOceanError, DigitalOceanResult};
pub use floating_ips::{FloatingIp, FloatingIpCreateRequest, FloatingIpsService, FloatingIpsServiceOp};
pub use models::{Droplet, Region};
pub use pagination::{Links, ListOptions, Meta, Pages};
pub use urn::{to_urn, ResourceWithUrn};
