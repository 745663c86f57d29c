// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of request construction and payload encoding, checked with
//! proptest.

mod floating_ip_properties;
