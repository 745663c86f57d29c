// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource URNs
//!
//! A URN names a resource across unrelated API calls (tagging, project
//! assignment) without a lookup: `do:{resource type}:{id}`.

use std::fmt::Display;

/// URN namespace for DigitalOcean resources
pub const URN_NAMESPACE: &str = "do";

/// Build a URN from a resource type and identifier
pub fn to_urn(resource_type: &str, id: impl Display) -> String {
    format!("{}:{}:{}", URN_NAMESPACE, resource_type, id)
}

/// A resource that can be referenced by URN
pub trait ResourceWithUrn {
    fn urn(&self) -> String;
}
