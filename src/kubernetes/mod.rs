// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for in-cluster client creation and pull secret publishing.

pub mod client;
pub mod secrets;

pub use client::in_cluster_client;
pub use secrets::{build_pull_secret, publish_secret};
