//! Fine-grained (second-level) monitoring configuration types.
//!
//! Fine-grained monitoring ships per-listener metrics into a Log Service
//! project/metricstore pair configured once per region.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::require;

// ── DescribeHdMonitorRegionConfig ────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHdMonitorRegionConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHdMonitorRegionConfigResponse {
    pub request_id: String,
    /// Log Service project receiving the metrics.
    pub log_project: Option<String>,
    /// Metricstore inside the project.
    pub metric_store: Option<String>,
}

// ── UpdateHdMonitorAttribute ─────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHdMonitorAttributeRequest {
    pub load_balancer_id: String,
    /// `on` or `off`.
    pub flag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateHdMonitorAttributeRequest {
    pub fn new(load_balancer_id: impl Into<String>, enabled: bool) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            flag: if enabled { "on".into() } else { "off".into() },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.flag != "on" && self.flag != "off" {
            return Err(Error::Validation {
                field: "Flag",
                reason: format!("expected \"on\" or \"off\", got {:?}", self.flag),
            });
        }
        Ok(())
    }
}
