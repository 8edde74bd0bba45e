//! CLI error types with miette diagnostics.
//!
//! Maps `nlb_api::Error` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const THROTTLED: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the NLB endpoint")]
    #[diagnostic(
        code(nlbctl::connection_failed),
        help(
            "Check the region id and your network path to *.aliyuncs.com.\n\
             A VPC endpoint can be selected with --endpoint."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Credentials / auth ───────────────────────────────────────────

    #[error("No credentials found")]
    #[diagnostic(
        code(nlbctl::no_credentials),
        help(
            "Export ALIBABA_CLOUD_ACCESS_KEY_ID and ALIBABA_CLOUD_ACCESS_KEY_SECRET.\n\
             STS sessions also need ALIBABA_CLOUD_SECURITY_TOKEN."
        )
    )]
    NoCredentials { message: String },

    #[error("The service rejected the request signature")]
    #[diagnostic(
        code(nlbctl::auth_failed),
        help("Verify the access key pair is active and the machine clock is accurate.")
    )]
    AuthFailed { message: String },

    // ── Service ──────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(nlbctl::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("Rate limited by the API")]
    #[diagnostic(
        code(nlbctl::throttled),
        help("Back off and retry; batch lookups with 'nlbctl job status' where possible.")
    )]
    Throttled { message: String },

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(nlbctl::api_error))]
    ApiError {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(nlbctl::validation))]
    Validation { field: String, reason: String },

    #[error("A region is required")]
    #[diagnostic(
        code(nlbctl::no_region),
        help(
            "Pass --region, set ALIBABA_CLOUD_REGION_ID, or configure a profile.\n\
             Discover regions with: nlbctl regions --endpoint <url>"
        )
    )]
    NoRegion,

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(nlbctl::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(nlbctl::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(nlbctl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Jobs ─────────────────────────────────────────────────────────

    #[error("Job {job_id} did not finish in time (last status: {status})")]
    #[diagnostic(
        code(nlbctl::job_timeout),
        help("Raise --max-wait, or keep polling with: nlbctl job status {job_id}")
    )]
    JobTimeout { job_id: String, status: String },

    #[error("Job {job_id} failed: {message}")]
    #[diagnostic(code(nlbctl::job_failed))]
    JobFailed { job_id: String, message: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(nlbctl::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoCredentials { .. } | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Throttled { .. } => exit_code::THROTTLED,
            Self::JobTimeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NoRegion
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── nlb_api::Error → CliError mapping ────────────────────────────────

impl From<nlb_api::Error> for CliError {
    fn from(err: nlb_api::Error) -> Self {
        use nlb_api::Error as Api;

        match err {
            Api::MissingCredentials { message } => CliError::NoCredentials { message },

            Api::Validation { field, reason } => CliError::Validation {
                field: field.to_owned(),
                reason,
            },

            Api::Transport(e) => CliError::ConnectionFailed { source: e.into() },

            Api::JobTimeout { job_id, status, .. } => CliError::JobTimeout { job_id, status },

            Api::JobFailed { job_id, message } => CliError::JobFailed { job_id, message },

            Api::Api {
                ref code,
                ref message,
                ref request_id,
                ..
            } => {
                if err.is_not_found() {
                    // "ResourceNotFound.loadBalancer" → "loadBalancer"
                    let resource_type = code
                        .split_once('.')
                        .map_or("resource", |(_, kind)| kind)
                        .to_owned();
                    CliError::NotFound {
                        resource_type,
                        identifier: message.clone(),
                    }
                } else if err.is_transient() {
                    CliError::Throttled {
                        message: message.clone(),
                    }
                } else if code == "IncompleteSignature" || code == "InvalidAccessKeyId.NotFound" {
                    CliError::AuthFailed {
                        message: message.clone(),
                    }
                } else {
                    CliError::ApiError {
                        code: code.clone(),
                        message: message.clone(),
                        request_id: request_id.clone(),
                    }
                }
            }

            other => CliError::ApiError {
                code: "internal".into(),
                message: other.to_string(),
                request_id: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_resource_kind() {
        let api_err = nlb_api::Error::Api {
            status: 404,
            code: "ResourceNotFound.loadBalancer".into(),
            message: "nlb-1".into(),
            request_id: None,
        };
        let cli_err = CliError::from(api_err);
        match cli_err {
            CliError::NotFound { resource_type, .. } => {
                assert_eq!(resource_type, "loadBalancer");
            }
            other => panic!("expected NotFound, got: {other:?}"),
        }
        assert_eq!(
            CliError::NoRegion.exit_code(),
            exit_code::USAGE
        );
    }
}
