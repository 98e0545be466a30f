// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The refresh pipeline: fetch a registry token, build the credential document
//! and publish it as a pull secret.

use crate::config::Config;
use crate::docker_config::DockerConfigJson;
use crate::error::Result;
use crate::kubernetes::{build_pull_secret, publish_secret};
use crate::registry::RegistryTokenSource;
use kube::Client;
use std::future::Future;
use tracing::{info, instrument};

/// Resolve configuration through `lookup`, then build the token source and run a refresh.
///
/// Neither `token_source` nor `connect` is invoked when configuration is incomplete.
pub async fn run<L, M, MFut, S, F, Fut>(lookup: L, token_source: M, connect: F) -> Result<()>
where
    L: Fn(&str) -> Option<String>,
    M: FnOnce() -> MFut,
    MFut: Future<Output = S>,
    S: RegistryTokenSource,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Client>>,
{
    let config = Config::from_lookup(lookup)?;
    info!("Storing secret in namespace: {}", config.namespace);
    info!("Secret name will be: {}", config.secret_name);
    info!("Write mode: {:?}", config.write_mode);

    let token_source = token_source().await;
    refresh(&config, &token_source, connect).await
}

/// Run a single refresh.
///
/// The cluster client is only requested through `connect` once the credential
/// document has been built, so a failing token fetch never touches the cluster.
#[instrument(skip_all, fields(secret = %format!("{}/{}", config.namespace, config.secret_name)))]
pub async fn refresh<S, F, Fut>(config: &Config, token_source: &S, connect: F) -> Result<()>
where
    S: RegistryTokenSource + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Client>>,
{
    let token = token_source.fetch_token().await?;
    let credential = token.decode()?;
    info!("Decoded registry credential for {}", credential.server);

    let document = DockerConfigJson::for_credential(&credential).to_vec()?;
    let secret = build_pull_secret(config, document, token.expires_at.as_deref());

    let client = connect().await?;
    publish_secret(client, config, &secret).await
}
