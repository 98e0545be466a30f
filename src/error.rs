// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegcredError {
    #[error("environment variable {0} is not set or empty")]
    MissingConfig(&'static str),

    #[error("failed to fetch ECR token: {0}")]
    TokenFetch(String),

    #[error("no authorization data returned from ECR")]
    NoAuthorizationData,

    #[error("authorization data has no {0}")]
    IncompleteAuthorizationData(&'static str),

    #[error("failed to decode ECR token: {0}")]
    TokenDecode(String),

    #[error("malformed authorization token")]
    MalformedToken,

    #[error("failed to marshal docker config: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to create in-cluster Kubernetes client: {0}")]
    ClusterAuth(String),

    #[error("failed to write docker-registry secret: {0}")]
    SecretWrite(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, RegcredError>;
