//! TLS security policy request/response types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::common::Tag;
use crate::types::require;

// ── CreateSecurityPolicy ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityPolicyRequest {
    pub security_policy_name: String,
    /// Cipher suites, e.g. `ECDHE-ECDSA-AES128-GCM-SHA256`.
    pub ciphers: Vec<String>,
    /// TLS versions, e.g. `TLSv1.2`, `TLSv1.3`.
    pub tls_versions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

impl CreateSecurityPolicyRequest {
    pub fn new(
        security_policy_name: impl Into<String>,
        tls_versions: Vec<String>,
        ciphers: Vec<String>,
    ) -> Self {
        Self {
            security_policy_name: security_policy_name.into(),
            ciphers,
            tls_versions,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("SecurityPolicyName", &self.security_policy_name)?;
        if self.ciphers.is_empty() {
            return Err(Error::Validation {
                field: "Ciphers",
                reason: "name at least one cipher suite".into(),
            });
        }
        if self.tls_versions.is_empty() {
            return Err(Error::Validation {
                field: "TlsVersions",
                reason: "name at least one TLS version".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityPolicyResponse {
    pub request_id: String,
    pub security_policy_id: Option<String>,
}

// ── UpdateSecurityPolicyAttribute ────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSecurityPolicyAttributeRequest {
    pub security_policy_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ciphers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tls_versions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_policy_name: Option<String>,
}

impl UpdateSecurityPolicyAttributeRequest {
    pub fn new(security_policy_id: impl Into<String>) -> Self {
        Self {
            security_policy_id: security_policy_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("SecurityPolicyId", &self.security_policy_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSecurityPolicyAttributeResponse {
    pub request_id: String,
    pub security_policy_id: Option<String>,
    pub job_id: Option<String>,
}

// ── DeleteSecurityPolicy ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSecurityPolicyRequest {
    pub security_policy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DeleteSecurityPolicyRequest {
    pub fn new(security_policy_id: impl Into<String>) -> Self {
        Self {
            security_policy_id: security_policy_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("SecurityPolicyId", &self.security_policy_id)
    }
}

// ── ListSecurityPolicy ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security_policy_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security_policy_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

/// A listener currently using a security policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelatedListener {
    pub listener_id: Option<String>,
    pub listener_port: Option<i64>,
    pub listener_protocol: Option<String>,
    pub load_balancer_id: Option<String>,
}

/// A custom TLS security policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityPolicy {
    pub security_policy_id: Option<String>,
    pub security_policy_name: Option<String>,
    /// One of: `Configuring`, `Available`.
    pub security_policy_status: Option<String>,
    /// Comma-separated cipher suites.
    pub ciphers: Option<String>,
    /// Comma-separated TLS versions.
    pub tls_version: Option<String>,
    pub region_id: Option<String>,
    pub resource_group_id: Option<String>,
    #[serde(default)]
    pub related_listeners: Vec<RelatedListener>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityPolicyResponse {
    pub request_id: String,
    #[serde(default)]
    pub security_policies: Vec<SecurityPolicy>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}

// ── ListSystemSecurityPolicy ─────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSystemSecurityPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

/// A predefined policy (`tls_cipher_policy_1_0` and friends).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemSecurityPolicy {
    pub security_policy_id: Option<String>,
    pub security_policy_name: Option<String>,
    pub ciphers: Option<String>,
    pub tls_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSystemSecurityPolicyResponse {
    pub request_id: String,
    #[serde(default)]
    pub security_policies: Vec<SystemSecurityPolicy>,
}
