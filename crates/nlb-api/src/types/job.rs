//! Asynchronous job types.
//!
//! Mutating operations return a `JobId` handle; the mutation itself runs
//! server-side. Callers poll `GetJobStatus` (or `ListAsynJobs` for a
//! batch) until the job reports `Succeeded` or `Failed` —
//! `Client::wait_for_job` wraps that loop.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::require;

/// Terminal and in-flight job states.
pub const JOB_STATUS_SUCCEEDED: &str = "Succeeded";
pub const JOB_STATUS_PROCESSING: &str = "Processing";
pub const JOB_STATUS_FAILED: &str = "Failed";

/// Response shared by the asynchronous mutations: the job handle plus the
/// request id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobResponse {
    pub request_id: String,
    pub job_id: Option<String>,
}

/// Response for mutations that complete synchronously — just the
/// request id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationResponse {
    pub request_id: String,
}

// ── GetJobStatus ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobStatusRequest {
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl GetJobStatusRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("JobId", &self.job_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetJobStatusResponse {
    pub request_id: String,
    /// `Succeeded`, `Processing`, or `Failed`.
    pub status: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

// ── ListAsynJobs ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAsynJobsRequest {
    /// Job ids to look up.
    pub ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl ListAsynJobsRequest {
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.ids.is_empty() {
            return Err(Error::Validation {
                field: "Ids",
                reason: "name at least one job id".into(),
            });
        }
        Ok(())
    }
}

/// One asynchronous job record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AsynJob {
    pub id: Option<String>,
    /// `Succeeded`, `Processing`, or `Failed`.
    pub status: Option<String>,
    pub create_time: Option<i64>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    /// The operation that spawned the job, e.g. `CreateListener`.
    pub operate_type: Option<String>,
    pub resource_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAsynJobsResponse {
    pub request_id: String,
    #[serde(default)]
    pub jobs: Vec<AsynJob>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}
