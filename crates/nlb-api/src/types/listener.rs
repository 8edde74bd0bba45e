//! Listener request/response types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rpc::json_string_field;
use crate::types::common::{ListenerProtocol, Tag};
use crate::types::require;

// ── Proxy Protocol v2 ────────────────────────────────────────────────

/// Which private-link attributes Proxy Protocol v2 TLVs carry to the
/// backend. On the wire this nested config travels as a single
/// JSON-encoded string parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProxyProtocolV2Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppv2_private_link_ep_id_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppv2_private_link_eps_id_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppv2_vpc_id_enabled: Option<bool>,
}

// ── The listener record ──────────────────────────────────────────────

/// A listener as returned by `ListListeners` and `GetListenerAttribute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listener {
    pub listener_id: Option<String>,
    pub listener_description: Option<String>,
    /// `TCP`, `UDP`, or `TCPSSL`.
    pub listener_protocol: Option<String>,
    /// `0` when the listener serves the `StartPort`..`EndPort` range.
    pub listener_port: Option<i32>,
    pub start_port: Option<i32>,
    pub end_port: Option<i32>,
    /// One of: `Provisioning`, `Running`, `Configuring`, `Stopping`,
    /// `Stopped`, `Starting`, `Deleting`, `Deleted`.
    pub listener_status: Option<String>,
    pub load_balancer_id: Option<String>,
    pub server_group_id: Option<String>,
    pub alpn_enabled: Option<bool>,
    /// ALPN negotiation policy, e.g. `HTTP2Preferred`.
    pub alpn_policy: Option<String>,
    pub ca_enabled: Option<bool>,
    #[serde(default)]
    pub ca_certificate_ids: Vec<String>,
    #[serde(default)]
    pub certificate_ids: Vec<String>,
    pub cps: Option<i32>,
    pub idle_timeout: Option<i32>,
    pub mss: Option<i32>,
    pub proxy_protocol_enabled: Option<bool>,
    pub proxy_protocol_v2_config: Option<ProxyProtocolV2Config>,
    pub sec_sensor_enabled: Option<bool>,
    pub security_policy_id: Option<String>,
    pub region_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

// ── CreateListener ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateListenerRequest {
    pub load_balancer_id: String,
    pub server_group_id: String,
    pub listener_protocol: ListenerProtocol,
    /// `0` opens the `start_port`..`end_port` range instead.
    pub listener_port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn_policy: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ca_certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol_enabled: Option<bool>,
    /// Sent as a single JSON-string parameter (the wire's "shrink" form).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_string_field"
    )]
    pub proxy_protocol_v2_config: Option<ProxyProtocolV2Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_sensor_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

impl CreateListenerRequest {
    pub fn new(
        load_balancer_id: impl Into<String>,
        server_group_id: impl Into<String>,
        listener_protocol: ListenerProtocol,
        listener_port: i32,
    ) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            server_group_id: server_group_id.into(),
            listener_protocol,
            listener_port,
            start_port: None,
            end_port: None,
            alpn_enabled: None,
            alpn_policy: None,
            ca_certificate_ids: Vec::new(),
            ca_enabled: None,
            certificate_ids: Vec::new(),
            client_token: None,
            cps: None,
            dry_run: None,
            idle_timeout: None,
            listener_description: None,
            mss: None,
            proxy_protocol_enabled: None,
            proxy_protocol_v2_config: None,
            region_id: None,
            sec_sensor_enabled: None,
            security_policy_id: None,
            tag: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        require("ServerGroupId", &self.server_group_id)?;
        if !(0..=65535).contains(&self.listener_port) {
            return Err(Error::Validation {
                field: "ListenerPort",
                reason: format!("{} is outside 0..=65535", self.listener_port),
            });
        }
        if self.listener_port == 0 && (self.start_port.is_none() || self.end_port.is_none()) {
            return Err(Error::Validation {
                field: "StartPort",
                reason: "port 0 selects a port range; StartPort and EndPort are required".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateListenerResponse {
    pub request_id: String,
    pub listener_id: Option<String>,
    pub job_id: Option<String>,
}

// ── Listener lifecycle (delete/start/stop share one shape) ───────────

macro_rules! listener_lifecycle_request {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, Serialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            pub listener_id: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub client_token: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub dry_run: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub region_id: Option<String>,
        }

        impl $name {
            pub fn new(listener_id: impl Into<String>) -> Self {
                Self {
                    listener_id: listener_id.into(),
                    ..Self::default()
                }
            }

            pub fn validate(&self) -> Result<(), Error> {
                require("ListenerId", &self.listener_id)
            }
        }
    };
}

listener_lifecycle_request!(DeleteListenerRequest);
listener_lifecycle_request!(
    /// Start a stopped listener. No-op if already `Running`.
    StartListenerRequest
);
listener_lifecycle_request!(
    /// Stop a running listener; traffic is rejected while `Stopped`.
    StopListenerRequest
);
listener_lifecycle_request!(GetListenerAttributeRequest);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetListenerAttributeResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub listener: Listener,
}

// ── ListListeners ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListListenersRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub listener_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_protocol: Option<ListenerProtocol>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub load_balancer_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListListenersResponse {
    pub request_id: String,
    #[serde(default)]
    pub listeners: Vec<Listener>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}

// ── UpdateListenerAttribute ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateListenerAttributeRequest {
    pub listener_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn_policy: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ca_certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol_enabled: Option<bool>,
    /// Sent as a single JSON-string parameter (the wire's "shrink" form).
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "json_string_field"
    )]
    pub proxy_protocol_v2_config: Option<ProxyProtocolV2Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_sensor_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_group_id: Option<String>,
}

impl UpdateListenerAttributeRequest {
    pub fn new(listener_id: impl Into<String>) -> Self {
        Self {
            listener_id: listener_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ListenerId", &self.listener_id)
    }
}

// ── GetListenerHealthStatus ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetListenerHealthStatusRequest {
    pub listener_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl GetListenerHealthStatusRequest {
    pub fn new(listener_id: impl Into<String>) -> Self {
        Self {
            listener_id: listener_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ListenerId", &self.listener_id)
    }
}

/// Why a backend is not `Normal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheckReason {
    /// E.g. `CONNECT_TIMEOUT`, `RECV_RESPONSE_TIMEOUT`.
    pub reason_code: Option<String>,
}

/// A backend currently failing its health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonNormalServer {
    pub port: Option<i32>,
    pub reason: Option<HealthCheckReason>,
    pub server_id: Option<String>,
    pub server_ip: Option<String>,
    /// One of: `Initial`, `Unhealthy`, `Unused`, `Unavailable`.
    pub status: Option<String>,
}

/// Health summary of one server group attached to the listener.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerGroupHealth {
    pub health_check_enabled: Option<bool>,
    #[serde(default)]
    pub non_normal_servers: Vec<NonNormalServer>,
    pub server_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListenerHealthStatus {
    pub listener_id: Option<String>,
    pub listener_port: Option<i32>,
    pub listener_protocol: Option<String>,
    #[serde(default)]
    pub server_group_infos: Vec<ServerGroupHealth>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetListenerHealthStatusResponse {
    pub request_id: String,
    #[serde(default)]
    pub listener_health_status: Vec<ListenerHealthStatus>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

// ── Additional certificates ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateAdditionalCertificatesWithListenerRequest {
    pub listener_id: String,
    pub additional_certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl AssociateAdditionalCertificatesWithListenerRequest {
    pub fn new(listener_id: impl Into<String>, certificate_ids: Vec<String>) -> Self {
        Self {
            listener_id: listener_id.into(),
            additional_certificate_ids: certificate_ids,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ListenerId", &self.listener_id)?;
        if self.additional_certificate_ids.is_empty() {
            return Err(Error::Validation {
                field: "AdditionalCertificateIds",
                reason: "name at least one certificate".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateAdditionalCertificatesWithListenerRequest {
    pub listener_id: String,
    pub additional_certificate_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DisassociateAdditionalCertificatesWithListenerRequest {
    pub fn new(listener_id: impl Into<String>, certificate_ids: Vec<String>) -> Self {
        Self {
            listener_id: listener_id.into(),
            additional_certificate_ids: certificate_ids,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ListenerId", &self.listener_id)?;
        if self.additional_certificate_ids.is_empty() {
            return Err(Error::Validation {
                field: "AdditionalCertificateIds",
                reason: "name at least one certificate".into(),
            });
        }
        Ok(())
    }
}

// ── ListListenerCertificates ─────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListListenerCertificatesRequest {
    pub listener_id: String,
    /// `Ca` or `Server`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl ListListenerCertificatesRequest {
    pub fn new(listener_id: impl Into<String>) -> Self {
        Self {
            listener_id: listener_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ListenerId", &self.listener_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListenerCertificate {
    pub certificate_id: Option<String>,
    /// `Ca` or `Server`.
    pub certificate_type: Option<String>,
    /// Whether this is the default server certificate.
    pub is_default: Option<bool>,
    /// `Associating`, `Associated`, or `Diassociating`.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListListenerCertificatesResponse {
    pub request_id: String,
    #[serde(default)]
    pub certificates: Vec<ListenerCertificate>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}
