// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry authorization tokens and the credentials decoded from them.

pub mod ecr;

pub use ecr::EcrTokenSource;

use crate::error::{RegcredError, Result};
use async_trait::async_trait;
use base64::Engine;
use std::fmt;

/// Source of short-lived registry authorization tokens
#[async_trait]
pub trait RegistryTokenSource: Send + Sync {
    /// Request a fresh authorization token from the registry service
    async fn fetch_token(&self) -> Result<RegistryToken>;
}

/// Authorization token as issued by the registry service
#[derive(Clone)]
pub struct RegistryToken {
    /// Base64 encoded `username:password`
    pub token: String,
    /// Registry endpoint the token is valid for, used verbatim
    pub proxy_endpoint: String,
    /// Token expiry (RFC 3339), when the service reports one
    pub expires_at: Option<String>,
}

impl RegistryToken {
    /// Decode the token into the username and password it carries
    pub fn decode(&self) -> Result<RegistryCredential> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&self.token)
            .map_err(|e| RegcredError::TokenDecode(e.to_string()))?;
        let decoded =
            String::from_utf8(decoded).map_err(|e| RegcredError::TokenDecode(e.to_string()))?;

        let Some((username, password)) = decoded.split_once(':') else {
            return Err(RegcredError::MalformedToken);
        };
        if username.is_empty() || password.is_empty() {
            return Err(RegcredError::MalformedToken);
        }

        Ok(RegistryCredential {
            username: username.to_string(),
            password: password.to_string(),
            server: self.proxy_endpoint.clone(),
        })
    }
}

impl fmt::Debug for RegistryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryToken")
            .field("token", &"<redacted>")
            .field("proxy_endpoint", &self.proxy_endpoint)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Registry login decoded from an authorization token
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryCredential {
    pub username: String,
    pub password: String,
    pub server: String,
}

impl fmt::Debug for RegistryCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("server", &self.server)
            .finish()
    }
}
