// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Amazon ECR token source using the AWS SDK default credential chain

use crate::error::{RegcredError, Result};
use crate::registry::{RegistryToken, RegistryTokenSource};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::operation::get_authorization_token::GetAuthorizationTokenOutput;
use aws_sdk_ecr::primitives::DateTimeFormat;
use aws_sdk_ecr::Client as EcrClient;
use tracing::{info, instrument};

/// Fetches authorization tokens from Amazon ECR
pub struct EcrTokenSource {
    client: EcrClient,
}

impl EcrTokenSource {
    /// Resolve AWS configuration through the default chain
    /// (environment credentials, then profile, then container/instance role).
    pub async fn from_default_chain() -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        info!(
            "Loaded AWS configuration, region={}",
            sdk_config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "<unset>".to_string())
        );
        Self::new(&sdk_config)
    }

    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: EcrClient::new(sdk_config),
        }
    }
}

#[async_trait]
impl RegistryTokenSource for EcrTokenSource {
    #[instrument(skip(self))]
    async fn fetch_token(&self) -> Result<RegistryToken> {
        let response = self
            .client
            .get_authorization_token()
            .send()
            .await
            .map_err(|e| RegcredError::TokenFetch(DisplayErrorContext(&e).to_string()))?;

        let token = first_authorization(&response)?;
        info!(
            "Received ECR token for {} (expires {})",
            token.proxy_endpoint,
            token.expires_at.as_deref().unwrap_or("unknown")
        );
        Ok(token)
    }
}

/// Take the first authorization record of a token response; an empty list is an error.
fn first_authorization(response: &GetAuthorizationTokenOutput) -> Result<RegistryToken> {
    let Some(data) = response.authorization_data().first() else {
        return Err(RegcredError::NoAuthorizationData);
    };

    let token = data
        .authorization_token()
        .ok_or(RegcredError::IncompleteAuthorizationData("authorization token"))?;
    let proxy_endpoint = data
        .proxy_endpoint()
        .ok_or(RegcredError::IncompleteAuthorizationData("proxy endpoint"))?;
    let expires_at = data
        .expires_at()
        .and_then(|t| t.fmt(DateTimeFormat::DateTime).ok());

    Ok(RegistryToken {
        token: token.to_string(),
        proxy_endpoint: proxy_endpoint.to_string(),
        expires_at,
    })
}
