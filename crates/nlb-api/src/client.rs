// NLB API HTTP client.
//
// Wraps `reqwest::Client` with endpoint resolution, request signing, and
// error-envelope parsing. The per-operation methods live in the `ops`
// modules as inherent impls, keeping this module focused on transport
// mechanics.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::credential::Credential;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::sign;
use crate::transport::TransportConfig;
use crate::types::common::API_VERSION;
use crate::types::job::{
    GetJobStatusRequest, JOB_STATUS_FAILED, JOB_STATUS_SUCCEEDED,
};

/// Error body shape the service returns with non-2xx statuses.
#[derive(serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorResponse {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Async client for the NLB control-plane API (version `2022-04-30`).
///
/// Stateless and cheap to clone; one instance can serve concurrent
/// requests. Every call is a signed `POST` of form parameters to the
/// regional endpoint.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint_url: Url,
    credential: Credential,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for one region with default transport settings.
    pub fn new(credential: Credential, endpoint: Endpoint) -> Result<Self, Error> {
        Self::with_transport(credential, endpoint, &TransportConfig::default())
    }

    /// Build with explicit transport settings (timeouts, custom CA).
    pub fn with_transport(
        credential: Credential,
        endpoint: Endpoint,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            endpoint_url: endpoint.url()?,
            credential,
        })
    }

    /// Credentials from the environment, regional endpoint from the
    /// region id.
    pub fn from_env(region_id: &str) -> Result<Self, Error> {
        Self::new(Credential::from_env()?, Endpoint::regional(region_id))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        http: reqwest::Client,
        credential: Credential,
        endpoint: Endpoint,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            endpoint_url: endpoint.url()?,
            credential,
        })
    }

    /// The URL requests are sent to.
    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Sign the parameter set for `action` and POST it as form data,
    /// decoding the JSON response into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        action: &'static str,
        params: Vec<(String, String)>,
    ) -> Result<T, Error> {
        let signed = sign::sign_request("POST", action, API_VERSION, &self.credential, params)?;

        debug!(action, "POST {}", self.endpoint_url);
        let resp = self
            .http
            .post(self.endpoint_url.clone())
            .form(&signed)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                code: err.code.unwrap_or_else(|| status.to_string()),
                message: err.message.unwrap_or_default(),
                request_id: err.request_id,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                code: status.to_string(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                request_id: None,
            }
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Drain a token-paged list operation into a single `Vec`.
    ///
    /// `fetch` is called with the `NextToken` to resume from (`None` for
    /// the first page) and returns one page of items plus the token for
    /// the next page, if any:
    ///
    /// ```no_run
    /// # async fn demo(client: &nlb_api::Client) -> Result<(), nlb_api::Error> {
    /// use nlb_api::types::load_balancer::ListLoadBalancersRequest;
    ///
    /// let all = client
    ///     .paginate_all(|token| async {
    ///         let mut req = ListLoadBalancersRequest::default();
    ///         req.next_token = token;
    ///         let page = client.list_load_balancers(&req).await?;
    ///         Ok((page.load_balancers, page.next_token))
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn paginate_all<T, F, Fut>(&self, fetch: F) -> Result<Vec<T>, Error>
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<(Vec<T>, Option<String>), Error>>,
    {
        let mut all = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let (items, next) = fetch(token).await?;
            all.extend(items);

            match next {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => break,
            }
        }

        Ok(all)
    }

    // ── Job polling ──────────────────────────────────────────────────

    /// Poll `GetJobStatus` until the job succeeds, fails, or the deadline
    /// passes.
    ///
    /// Returns `Ok(())` on `Succeeded`; `Error::JobFailed` carries the
    /// service's error message on `Failed`; `Error::JobTimeout` if the
    /// job is still in flight when `timeout` elapses.
    pub async fn wait_for_job(
        &self,
        job_id: &str,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<(), Error> {
        let started = tokio::time::Instant::now();

        loop {
            let resp = self.get_job_status(&GetJobStatusRequest::new(job_id)).await?;
            let status = resp.status.unwrap_or_default();

            match status.as_str() {
                JOB_STATUS_SUCCEEDED => return Ok(()),
                JOB_STATUS_FAILED => {
                    return Err(Error::JobFailed {
                        job_id: job_id.to_owned(),
                        message: resp
                            .error_message
                            .or(resp.error_code)
                            .unwrap_or_else(|| "no error details".into()),
                    });
                }
                _ => {}
            }

            if started.elapsed() >= timeout {
                return Err(Error::JobTimeout {
                    job_id: job_id.to_owned(),
                    status,
                    waited_secs: started.elapsed().as_secs(),
                });
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}
