use thiserror::Error;

/// Top-level error type for the `nlb-api` crate.
///
/// Covers every failure mode: credential resolution, request validation,
/// signing, transport, and errors returned by the NLB service itself.
/// Service errors keep the `RequestId` so failures can be escalated to
/// Alibaba Cloud support with a concrete reference.
#[derive(Debug, Error)]
pub enum Error {
    // ── Credentials ─────────────────────────────────────────────────
    /// No usable credentials were found in the environment.
    #[error("Missing credentials: {message}")]
    MissingCredentials { message: String },

    // ── Request validation ──────────────────────────────────────────
    /// A required field was unset or a field value is out of range.
    ///
    /// Raised before the request leaves the process; nothing was sent.
    #[error("Invalid request: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Request signing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    // ── Service ─────────────────────────────────────────────────────
    /// Structured error returned by the NLB API
    /// (parsed from the `{RequestId, Code, Message}` error body).
    #[error("NLB API error (HTTP {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Job polling ─────────────────────────────────────────────────
    /// An asynchronous job did not reach a terminal state in time.
    #[error("Job {job_id} still {status} after {waited_secs}s")]
    JobTimeout {
        job_id: String,
        status: String,
        waited_secs: u64,
    },

    /// An asynchronous job reached the `Failed` state.
    #[error("Job {job_id} failed: {message}")]
    JobFailed { job_id: String, message: String },
}

impl Error {
    /// Returns `true` if this is the `DryRunOperation` error code — the
    /// service's way of reporting that a `DryRun` request would have
    /// succeeded without actually executing it.
    pub fn is_dry_run_ok(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "DryRunOperation")
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, code, .. } => {
                *status == 429 || code.starts_with("Throttling") || code == "ServiceUnavailable"
            }
            _ => false,
        }
    }

    /// Returns `true` if the service reported the target resource missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status, code, .. } => *status == 404 || code.starts_with("ResourceNotFound"),
            _ => false,
        }
    }

    /// Extract the service error code, if this is a service error.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Extract the `RequestId` attached to a service error, if any.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}
