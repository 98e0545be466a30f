// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Building and writing the registry pull secret

use crate::config::{Config, WriteMode};
use crate::constants::{
    annotations, labels, DOCKER_CONFIG_JSON_KEY, DOCKER_CONFIG_JSON_TYPE, FIELD_MANAGER,
};
use crate::error::Result;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, Patch, PatchParams, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Build the `kubernetes.io/dockerconfigjson` secret holding `document`
pub fn build_pull_secret(config: &Config, document: Vec<u8>, expires_at: Option<&str>) -> Secret {
    let annotations = expires_at.map(|t| {
        BTreeMap::from([(annotations::TOKEN_EXPIRES_AT.to_string(), t.to_string())])
    });

    Secret {
        metadata: ObjectMeta {
            name: Some(config.secret_name.clone()),
            namespace: Some(config.namespace.clone()),
            labels: Some(BTreeMap::from([(
                labels::MANAGED_BY.to_string(),
                FIELD_MANAGER.to_string(),
            )])),
            annotations,
            ..Default::default()
        },
        type_: Some(DOCKER_CONFIG_JSON_TYPE.to_string()),
        data: Some(BTreeMap::from([(
            DOCKER_CONFIG_JSON_KEY.to_string(),
            ByteString(document),
        )])),
        ..Default::default()
    }
}

/// Write the pull secret to its namespace according to the configured write mode
#[instrument(
    skip(client, config, secret),
    fields(secret = %format!("{}/{}", config.namespace, config.secret_name), mode = ?config.write_mode)
)]
pub async fn publish_secret(client: Client, config: &Config, secret: &Secret) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client, &config.namespace);

    match config.write_mode {
        WriteMode::Create => {
            secrets.create(&PostParams::default(), secret).await?;
        }
        WriteMode::Apply => {
            let pp = PatchParams::apply(FIELD_MANAGER).force();
            secrets
                .patch(&config.secret_name, &pp, &Patch::Apply(secret))
                .await?;
        }
    }

    info!(
        "Docker-registry secret {}/{} written successfully",
        config.namespace, config.secret_name
    );

    Ok(())
}
