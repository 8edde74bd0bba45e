//! Server group request/response types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::common::{Scheduler, ServerGroupType, ServerType, Tag};
use crate::types::require;

// ── Health check config ──────────────────────────────────────────────

/// Health-check settings of a server group. All fields are optional on
/// the wire; the service fills protocol-appropriate defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthCheckConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_enabled: Option<bool>,
    /// `TCP` or `HTTP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    /// `0` probes the backend's own port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_connect_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_connect_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub health_check_http_code: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold: Option<i32>,
    /// `GET` or `HEAD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_check_method: Option<String>,
}

// ── The server group record ──────────────────────────────────────────

/// A server group as returned by `ListServerGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerGroup {
    pub server_group_id: Option<String>,
    pub server_group_name: Option<String>,
    /// `Instance` or `Ip`.
    pub server_group_type: Option<String>,
    /// One of: `Creating`, `Available`, `Configuring`.
    pub server_group_status: Option<String>,
    /// `TCP`, `UDP`, or `TCPSSL`.
    pub protocol: Option<String>,
    /// `Wrr`, `Wlc`, `rr`, `sch`, `tch`, or `qch`.
    pub scheduler: Option<String>,
    pub address_ip_version: Option<String>,
    pub any_port_enabled: Option<bool>,
    pub connection_drain_enabled: Option<bool>,
    pub connection_drain_timeout: Option<i32>,
    pub health_check: Option<HealthCheckConfig>,
    pub persistence_enabled: Option<bool>,
    pub persistence_timeout: Option<i32>,
    pub preserve_client_ip_enabled: Option<bool>,
    #[serde(default)]
    pub related_load_balancer_ids: Vec<String>,
    pub region_id: Option<String>,
    pub resource_group_id: Option<String>,
    pub server_count: Option<i32>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub vpc_id: Option<String>,
}

// ── CreateServerGroup ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServerGroupRequest {
    pub server_group_name: String,
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_group_type: Option<ServerGroupType>,
    /// `TCP` (default), `UDP`, or `TCPSSL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_ip_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_port_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_drain_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_drain_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_config: Option<HealthCheckConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_client_ip_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

impl CreateServerGroupRequest {
    pub fn new(server_group_name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            server_group_name: server_group_name.into(),
            vpc_id: vpc_id.into(),
            server_group_type: None,
            protocol: None,
            scheduler: None,
            address_ip_version: None,
            any_port_enabled: None,
            client_token: None,
            connection_drain_enabled: None,
            connection_drain_timeout: None,
            dry_run: None,
            health_check_config: None,
            persistence_enabled: None,
            persistence_timeout: None,
            preserve_client_ip_enabled: None,
            region_id: None,
            resource_group_id: None,
            tag: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupName", &self.server_group_name)?;
        require("VpcId", &self.vpc_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServerGroupResponse {
    pub request_id: String,
    pub server_group_id: Option<String>,
    pub job_id: Option<String>,
}

// ── DeleteServerGroup ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteServerGroupRequest {
    pub server_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DeleteServerGroupRequest {
    pub fn new(server_group_id: impl Into<String>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)
    }
}

// ── ListServerGroups ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServerGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub server_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub server_group_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_group_type: Option<ServerGroupType>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServerGroupsResponse {
    pub request_id: String,
    #[serde(default)]
    pub server_groups: Vec<ServerGroup>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}

// ── UpdateServerGroupAttribute ───────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateServerGroupAttributeRequest {
    pub server_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_drain_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_drain_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_config: Option<HealthCheckConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_client_ip_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_group_name: Option<String>,
}

impl UpdateServerGroupAttributeRequest {
    pub fn new(server_group_id: impl Into<String>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)
    }
}

// ── Backend servers ──────────────────────────────────────────────────

/// A backend to add to a server group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerRequest {
    /// ECS/ENI/ECI instance id, or the IP itself for `Ip` groups.
    pub server_id: String,
    pub server_type: ServerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_ip: Option<String>,
    /// Required unless the group has `AnyPortEnabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// 0-100; a weight of 0 stops new connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerRequest {
    pub fn new(server_id: impl Into<String>, server_type: ServerType) -> Self {
        Self {
            server_id: server_id.into(),
            server_type,
            server_ip: None,
            port: None,
            weight: None,
            description: None,
        }
    }

    fn validate(&self, idx: usize) -> Result<(), Error> {
        if self.server_id.is_empty() {
            return Err(Error::Validation {
                field: "Servers",
                reason: format!("server {} is missing ServerId", idx + 1),
            });
        }
        if let Some(weight) = self.weight {
            if !(0..=100).contains(&weight) {
                return Err(Error::Validation {
                    field: "Servers",
                    reason: format!("server {} weight {weight} is outside 0..=100", idx + 1),
                });
            }
        }
        Ok(())
    }
}

fn validate_servers(servers: &[ServerRequest]) -> Result<(), Error> {
    if servers.is_empty() {
        return Err(Error::Validation {
            field: "Servers",
            reason: "at least one server is required".into(),
        });
    }
    for (idx, server) in servers.iter().enumerate() {
        server.validate(idx)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddServersToServerGroupRequest {
    pub server_group_id: String,
    pub servers: Vec<ServerRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl AddServersToServerGroupRequest {
    pub fn new(server_group_id: impl Into<String>, servers: Vec<ServerRequest>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            servers,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)?;
        validate_servers(&self.servers)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveServersFromServerGroupRequest {
    pub server_group_id: String,
    pub servers: Vec<ServerRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl RemoveServersFromServerGroupRequest {
    pub fn new(server_group_id: impl Into<String>, servers: Vec<ServerRequest>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            servers,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)?;
        validate_servers(&self.servers)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateServerGroupServersAttributeRequest {
    pub server_group_id: String,
    pub servers: Vec<ServerRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateServerGroupServersAttributeRequest {
    pub fn new(server_group_id: impl Into<String>, servers: Vec<ServerRequest>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            servers,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)?;
        validate_servers(&self.servers)
    }
}

/// Response shared by the three server-membership mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerGroupJobResponse {
    pub request_id: String,
    pub server_group_id: Option<String>,
    pub job_id: Option<String>,
}

// ── ListServerGroupServers ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServerGroupServersRequest {
    pub server_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub server_ids: Vec<String>,
}

impl ListServerGroupServersRequest {
    pub fn new(server_group_id: impl Into<String>) -> Self {
        Self {
            server_group_id: server_group_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ServerGroupId", &self.server_group_id)
    }
}

/// A backend as reported by `ListServerGroupServers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerGroupServer {
    pub description: Option<String>,
    pub port: Option<i32>,
    pub server_group_id: Option<String>,
    pub server_id: Option<String>,
    pub server_ip: Option<String>,
    /// `Ecs`, `Eni`, `Eci`, or `Ip`.
    pub server_type: Option<String>,
    /// One of: `Adding`, `Available`, `Configuring`, `Removing`.
    pub status: Option<String>,
    pub weight: Option<i32>,
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServerGroupServersResponse {
    pub request_id: String,
    #[serde(default)]
    pub servers: Vec<ServerGroupServer>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}
