// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-cluster client creation

use crate::error::{RegcredError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a Kubernetes client from the service account of the pod we run in
pub async fn in_cluster_client() -> Result<Client> {
    let config = KConfig::incluster().map_err(|e| {
        RegcredError::ClusterAuth(format!("Failed to load in-cluster config: {}", e))
    })?;
    debug!("Using in-cluster API server {}", config.cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| RegcredError::ClusterAuth(format!("Failed to create client: {}", e)))?;
    info!("Connected to Kubernetes cluster");

    Ok(client)
}
