// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ecr_regcred::config::env_lookup;
use ecr_regcred::kubernetes::in_cluster_client;
use ecr_regcred::refresh::run;
use ecr_regcred::registry::EcrTokenSource;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(env_lookup, EcrTokenSource::from_default_chain, in_cluster_client)
        .await
        .inspect_err(|e| error!("{}", e))?;

    info!("Docker-registry secret refreshed successfully");
    Ok(())
}
