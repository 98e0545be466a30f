// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use crate::error::{RegcredError, Result};
use std::env;

/// How the pull secret is written to the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Plain create; the run fails if the secret already exists
    #[default]
    Create,
    /// Server-side apply; creates the secret or replaces an existing one
    Apply,
}

/// Look up a variable in the process environment
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Job configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the pull secret is written to
    pub namespace: String,
    /// Name of the pull secret
    pub secret_name: String,
    pub write_mode: WriteMode,
}

impl Config {
    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(RegcredError::MissingConfig(key))
        };

        let namespace = required(vars::NAMESPACE)?;
        let secret_name = required(vars::SECRET_NAME)?;

        let replace_existing: bool = lookup(vars::REPLACE_EXISTING)
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        let write_mode = if replace_existing {
            WriteMode::Apply
        } else {
            WriteMode::Create
        };

        Ok(Config {
            namespace,
            secret_name,
            write_mode,
        })
    }
}
