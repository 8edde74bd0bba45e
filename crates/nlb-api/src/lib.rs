//! Async Rust client for the Alibaba Cloud Network Load Balancer (NLB)
//! control-plane API, version `2022-04-30`.
//!
//! Every operation is a signed RPC-style `POST` to the regional endpoint
//! (`https://nlb.{region-id}.aliyuncs.com`). Requests serialize to flat
//! form parameters, responses decode from JSON into typed structs.
//!
//! # Quick start
//!
//! ```no_run
//! use nlb_api::types::load_balancer::ListLoadBalancersRequest;
//! use nlb_api::{Client, Credential, Endpoint};
//!
//! # async fn example() -> Result<(), nlb_api::Error> {
//! let client = Client::new(
//!     Credential::from_env()?,
//!     Endpoint::regional("cn-hangzhou"),
//! )?;
//!
//! let page = client
//!     .list_load_balancers(&ListLoadBalancersRequest::default())
//!     .await?;
//! for lb in &page.load_balancers {
//!     println!(
//!         "{}  {}",
//!         lb.load_balancer_id.as_deref().unwrap_or("-"),
//!         lb.load_balancer_status.as_deref().unwrap_or("-"),
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Mutations are asynchronous server-side: they return a `JobId` which can
//! be polled via [`Client::get_job_status`] or awaited with
//! [`Client::wait_for_job`]. Mutating requests accept a `client_token`
//! idempotency key and a `dry_run` flag; a successful dry run surfaces as
//! an error whose [`Error::is_dry_run_ok`] returns `true`.

pub mod client;
pub mod credential;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

mod ops;
mod rpc;
mod sign;

pub use client::Client;
pub use credential::Credential;
pub use endpoint::Endpoint;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};

// Compile-time assertions: key types must be Send + Sync for use across
// tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<Error>;
    let _ = assert_send_sync::<Credential>;
};
