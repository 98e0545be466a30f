// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry credential document in the `.dockerconfigjson` format

use crate::error::Result;
use crate::registry::RegistryCredential;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `{"auths": {<server>: {auth, password, username}}}`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DockerConfigJson {
    pub auths: BTreeMap<String, DockerConfigAuth>,
}

/// Fields are declared in lexical order, matching docker config writers that
/// serialize this record as a sorted map.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DockerConfigAuth {
    /// Base64 of `username:password`
    pub auth: String,
    pub password: String,
    pub username: String,
}

impl DockerConfigJson {
    /// Build a document holding a single registry login
    pub fn for_credential(credential: &RegistryCredential) -> Self {
        let auth = base64::engine::general_purpose::STANDARD.encode(format!(
            "{}:{}",
            credential.username, credential.password
        ));

        Self {
            auths: BTreeMap::from([(
                credential.server.clone(),
                DockerConfigAuth {
                    auth,
                    password: credential.password.clone(),
                    username: credential.username.clone(),
                },
            )]),
        }
    }

    /// Serialize to the bytes stored in the secret
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
