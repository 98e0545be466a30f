// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by ecr-regcred
pub mod env {
    /// Namespace the pull secret is written to
    pub const NAMESPACE: &str = "VAR_NAMESPACE";
    /// Name of the pull secret
    pub const SECRET_NAME: &str = "VAR_SECRETNAME";
    /// When set to "true", an existing secret is replaced instead of failing the run
    pub const REPLACE_EXISTING: &str = "VAR_REPLACE_EXISTING";
}

/// Kubernetes secret type for registry credentials
pub const DOCKER_CONFIG_JSON_TYPE: &str = "kubernetes.io/dockerconfigjson";

/// Data key the registry credential document is stored under
pub const DOCKER_CONFIG_JSON_KEY: &str = ".dockerconfigjson";

/// The field manager name used for server-side apply
pub const FIELD_MANAGER: &str = "ecr-regcred";

/// Kubernetes annotation keys set on the published secret
pub mod annotations {
    /// Expiry of the registry token embedded in the secret (RFC 3339)
    pub const TOKEN_EXPIRES_AT: &str = "ecr-regcred/token-expires-at";
}

/// Kubernetes label keys set on the published secret
pub mod labels {
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
}
