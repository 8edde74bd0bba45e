//! Vocabulary shared across resource areas.
//!
//! Caller-supplied closed vocabularies are enums that serialize to the
//! exact wire spelling (the scheduler values are lowercase on the wire,
//! the protocols uppercase — the variants here mirror that, not tidy it).
//! Server-reported status fields stay `String`s on the response types,
//! documented with their value sets.

use serde::{Deserialize, Serialize};

/// API version every request is stamped with.
pub const API_VERSION: &str = "2022-04-30";

// ── Tags ─────────────────────────────────────────────────────────────

/// A resource tag. Also used as a tag *filter* on list operations, where
/// `value` may be unset to match any value for the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

// ── Address vocabulary ───────────────────────────────────────────────

/// Whether a load balancer is reachable from the internet or only inside
/// its VPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum AddressType {
    Internet,
    Intranet,
}

/// IP stack of a load balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum AddressIpVersion {
    Ipv4,
    DualStack,
}

/// How the IPv6 side of a dual-stack instance is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Ipv6AddressType {
    Internet,
    Intranet,
}

// ── Listener vocabulary ──────────────────────────────────────────────

/// Layer-4 listener protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ListenerProtocol {
    #[serde(rename = "TCP")]
    #[strum(serialize = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    #[strum(serialize = "UDP")]
    Udp,
    #[serde(rename = "TCPSSL")]
    #[strum(serialize = "TCPSSL")]
    TcpSsl,
}

// ── Server group vocabulary ──────────────────────────────────────────

/// Scheduling algorithm for a server group. Wire spellings are uneven
/// (`Wrr` vs `rr`) — kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Scheduler {
    /// Weighted round-robin.
    Wrr,
    /// Weighted least-connections.
    Wlc,
    /// Plain round-robin.
    #[serde(rename = "rr")]
    #[strum(serialize = "rr")]
    Rr,
    /// Source-IP hash.
    #[serde(rename = "sch")]
    #[strum(serialize = "sch")]
    Sch,
    /// Four-tuple hash.
    #[serde(rename = "tch")]
    #[strum(serialize = "tch")]
    Tch,
    /// QUIC-ID hash.
    #[serde(rename = "qch")]
    #[strum(serialize = "qch")]
    Qch,
}

/// Kind of backend a server group holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ServerGroupType {
    Instance,
    Ip,
}

/// Kind of a single backend server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ServerType {
    /// ECS instance.
    Ecs,
    /// Elastic network interface.
    Eni,
    /// Elastic container instance.
    Eci,
    /// Raw IP address.
    Ip,
}

// ── Tagging vocabulary ───────────────────────────────────────────────

/// Resource kinds addressable by the tag operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum TagResourceType {
    #[serde(rename = "loadbalancer")]
    #[strum(serialize = "loadbalancer")]
    LoadBalancer,
    #[serde(rename = "listener")]
    #[strum(serialize = "listener")]
    Listener,
    #[serde(rename = "servergroup")]
    #[strum(serialize = "servergroup")]
    ServerGroup,
    #[serde(rename = "securitypolicy")]
    #[strum(serialize = "securitypolicy")]
    SecurityPolicy,
}

// ── Protection configs ───────────────────────────────────────────────

/// Deletion protection state of a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletionProtectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When protection was enabled. Response-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_time: Option<String>,
}

/// Modification (configuration-change) protection state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModificationProtectionConfig {
    /// `NonProtection` or `ConsoleProtection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Response-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_time: Option<String>,
}

/// Billing settings. NLB is pay-as-you-go only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerBillingConfig {
    /// `PostPay`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_wire_spellings() {
        let cases = [
            (Scheduler::Wrr, "\"Wrr\""),
            (Scheduler::Wlc, "\"Wlc\""),
            (Scheduler::Rr, "\"rr\""),
            (Scheduler::Sch, "\"sch\""),
            (Scheduler::Tch, "\"tch\""),
            (Scheduler::Qch, "\"qch\""),
        ];
        for (variant, wire) in cases {
            assert_eq!(serde_json::to_string(&variant).unwrap(), wire);
        }
    }

    #[test]
    fn listener_protocol_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&ListenerProtocol::TcpSsl).unwrap(),
            "\"TCPSSL\""
        );
        assert_eq!(ListenerProtocol::TcpSsl.to_string(), "TCPSSL");
    }

    #[test]
    fn tag_resource_type_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TagResourceType::ServerGroup).unwrap(),
            "\"servergroup\""
        );
    }
}
