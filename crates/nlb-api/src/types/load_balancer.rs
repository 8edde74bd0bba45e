//! Load balancer request/response types.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::common::{
    AddressIpVersion, AddressType, DeletionProtectionConfig, Ipv6AddressType,
    LoadBalancerBillingConfig, ModificationProtectionConfig, Tag,
};
use crate::types::require;

// ── Zone mappings ────────────────────────────────────────────────────

/// One zone a load balancer deploys into: the zone, the vSwitch it uses
/// there, and optionally pinned addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneMappingRequest {
    pub zone_id: String,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: String,
    /// EIP allocation to bind in this zone (internet instances).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// Pin the private IPv4 address instead of letting the service pick.
    #[serde(rename = "PrivateIPv4Address", skip_serializing_if = "Option::is_none")]
    pub private_ipv4_address: Option<String>,
}

impl ZoneMappingRequest {
    pub fn new(zone_id: impl Into<String>, v_switch_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            v_switch_id: v_switch_id.into(),
            allocation_id: None,
            private_ipv4_address: None,
        }
    }
}

/// An address the load balancer holds in one zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerAddress {
    pub allocation_id: Option<String>,
    pub eni_id: Option<String>,
    pub ipv6_address: Option<String>,
    #[serde(rename = "PrivateIPv4Address")]
    pub private_ipv4_address: Option<String>,
    #[serde(rename = "PublicIPv4Address")]
    pub public_ipv4_address: Option<String>,
}

/// Zone deployment as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneMapping {
    #[serde(default)]
    pub load_balancer_addresses: Vec<LoadBalancerAddress>,
    /// One of: `Active`, `Stopped`, `Shifted`, `Starting`, `Stopping`.
    pub status: Option<String>,
    #[serde(rename = "VSwitchId")]
    pub v_switch_id: Option<String>,
    pub zone_id: Option<String>,
}

/// A lock the service has placed on an instance (overdue payment, security
/// action, etc.). Locked instances reject mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationLock {
    pub lock_reason: Option<String>,
    /// One of: `SecurityLocked`, `RelatedResourceLocked`, `FinancialLocked`,
    /// `ResidualLocked`.
    pub lock_type: Option<String>,
}

// ── The load balancer record ─────────────────────────────────────────

/// A load balancer instance as returned by `ListLoadBalancers` and
/// `GetLoadBalancerAttribute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancer {
    pub load_balancer_id: Option<String>,
    pub load_balancer_name: Option<String>,
    /// Always `Network` for this product.
    pub load_balancer_type: Option<String>,
    /// One of: `Provisioning`, `Active`, `Configuring`, `CreateFailed`,
    /// `Inactive`, `Deleting`, `Deleted`.
    pub load_balancer_status: Option<String>,
    /// One of: `Normal`, `Abnormal`.
    pub load_balancer_business_status: Option<String>,
    pub address_type: Option<String>,
    pub address_ip_version: Option<String>,
    pub ipv6_address_type: Option<String>,
    #[serde(rename = "DNSName")]
    pub dns_name: Option<String>,
    pub bandwidth_package_id: Option<String>,
    pub cps: Option<i32>,
    pub cross_zone_enabled: Option<bool>,
    pub create_time: Option<String>,
    pub deletion_protection_config: Option<DeletionProtectionConfig>,
    pub modification_protection_config: Option<ModificationProtectionConfig>,
    pub load_balancer_billing_config: Option<LoadBalancerBillingConfig>,
    #[serde(default)]
    pub operation_locks: Vec<OperationLock>,
    pub region_id: Option<String>,
    pub resource_group_id: Option<String>,
    #[serde(default)]
    pub security_group_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub vpc_id: Option<String>,
    #[serde(default)]
    pub zone_mappings: Vec<ZoneMapping>,
}

// ── CreateLoadBalancer ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLoadBalancerRequest {
    pub address_type: AddressType,
    pub vpc_id: String,
    pub zone_mappings: Vec<ZoneMappingRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_ip_version: Option<AddressIpVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection_config: Option<DeletionProtectionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_billing_config: Option<LoadBalancerBillingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_protection_config: Option<ModificationProtectionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
}

impl CreateLoadBalancerRequest {
    pub fn new(
        address_type: AddressType,
        vpc_id: impl Into<String>,
        zone_mappings: Vec<ZoneMappingRequest>,
    ) -> Self {
        Self {
            address_type,
            vpc_id: vpc_id.into(),
            zone_mappings,
            address_ip_version: None,
            bandwidth_package_id: None,
            client_token: None,
            deletion_protection_config: None,
            dry_run: None,
            load_balancer_billing_config: None,
            load_balancer_name: None,
            modification_protection_config: None,
            region_id: None,
            resource_group_id: None,
            tag: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("VpcId", &self.vpc_id)?;
        if self.zone_mappings.is_empty() {
            return Err(Error::Validation {
                field: "ZoneMappings",
                reason: "at least one zone mapping is required".into(),
            });
        }
        for (idx, zone) in self.zone_mappings.iter().enumerate() {
            if zone.zone_id.is_empty() || zone.v_switch_id.is_empty() {
                return Err(Error::Validation {
                    field: "ZoneMappings",
                    reason: format!("mapping {} needs both ZoneId and VSwitchId", idx + 1),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLoadBalancerResponse {
    pub request_id: String,
    /// The new instance id. The lowercase `b` in the wire name is the
    /// service's spelling, not ours.
    #[serde(rename = "LoadbalancerId")]
    pub load_balancer_id: Option<String>,
    pub order_id: Option<i64>,
    pub job_id: Option<String>,
}

// ── DeleteLoadBalancer ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLoadBalancerRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DeleteLoadBalancerRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

// ── GetLoadBalancerAttribute ─────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoadBalancerAttributeRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl GetLoadBalancerAttributeRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

/// Full attribute view of one instance. The instance fields are flattened
/// alongside `RequestId`, so this deserializes from the same shape
/// `ListLoadBalancers` items use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoadBalancerAttributeResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub load_balancer: LoadBalancer,
}

// ── ListLoadBalancers ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLoadBalancersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_ip_version: Option<AddressIpVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
    #[serde(rename = "DNSName", skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address_type: Option<Ipv6AddressType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_business_status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub load_balancer_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub load_balancer_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub vpc_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLoadBalancersResponse {
    pub request_id: String,
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}

// ── UpdateLoadBalancerAttribute ──────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAttributeRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_zone_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateLoadBalancerAttributeRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

// ── UpdateLoadBalancerAddressTypeConfig ──────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLoadBalancerAddressTypeConfigRequest {
    pub load_balancer_id: String,
    pub address_type: AddressType,
    /// Required when switching to `Internet`: the zones in which to bind
    /// public addresses.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub zone_mappings: Vec<ZoneMappingRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateLoadBalancerAddressTypeConfigRequest {
    pub fn new(load_balancer_id: impl Into<String>, address_type: AddressType) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            address_type,
            zone_mappings: Vec::new(),
            client_token: None,
            dry_run: None,
            region_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

// ── UpdateLoadBalancerProtection ─────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLoadBalancerProtectionRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_protection_reason: Option<String>,
    /// `NonProtection` or `ConsoleProtection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_protection_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateLoadBalancerProtectionRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

// ── UpdateLoadBalancerZones ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLoadBalancerZonesRequest {
    pub load_balancer_id: String,
    /// The complete target zone set — the service reconciles toward this,
    /// adding and removing zones as needed.
    pub zone_mappings: Vec<ZoneMappingRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl UpdateLoadBalancerZonesRequest {
    pub fn new(
        load_balancer_id: impl Into<String>,
        zone_mappings: Vec<ZoneMappingRequest>,
    ) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            zone_mappings,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.zone_mappings.is_empty() {
            return Err(Error::Validation {
                field: "ZoneMappings",
                reason: "the target zone set must not be empty".into(),
            });
        }
        Ok(())
    }
}

// ── Zone shifting ────────────────────────────────────────────────────

/// Zone reference for shift operations — only the zone id travels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShiftZoneMapping {
    pub zone_id: String,
}

/// Drain traffic away from the named zones (DNS removal first, then
/// address withdrawal). Reversed by `CancelShiftLoadBalancerZones`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartShiftLoadBalancerZonesRequest {
    pub load_balancer_id: String,
    pub zone_mappings: Vec<ShiftZoneMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl StartShiftLoadBalancerZonesRequest {
    pub fn new(load_balancer_id: impl Into<String>, zone_ids: Vec<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            zone_mappings: zone_ids
                .into_iter()
                .map(|zone_id| ShiftZoneMapping { zone_id })
                .collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.zone_mappings.is_empty() {
            return Err(Error::Validation {
                field: "ZoneMappings",
                reason: "name at least one zone to shift".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelShiftLoadBalancerZonesRequest {
    pub load_balancer_id: String,
    pub zone_mappings: Vec<ShiftZoneMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl CancelShiftLoadBalancerZonesRequest {
    pub fn new(load_balancer_id: impl Into<String>, zone_ids: Vec<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            zone_mappings: zone_ids
                .into_iter()
                .map(|zone_id| ShiftZoneMapping { zone_id })
                .collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.zone_mappings.is_empty() {
            return Err(Error::Validation {
                field: "ZoneMappings",
                reason: "name at least one zone to cancel shifting for".into(),
            });
        }
        Ok(())
    }
}

// ── Bandwidth packages ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachCommonBandwidthPackageToLoadBalancerRequest {
    pub bandwidth_package_id: String,
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl AttachCommonBandwidthPackageToLoadBalancerRequest {
    pub fn new(
        load_balancer_id: impl Into<String>,
        bandwidth_package_id: impl Into<String>,
    ) -> Self {
        Self {
            bandwidth_package_id: bandwidth_package_id.into(),
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        require("BandwidthPackageId", &self.bandwidth_package_id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachCommonBandwidthPackageFromLoadBalancerRequest {
    pub bandwidth_package_id: String,
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DetachCommonBandwidthPackageFromLoadBalancerRequest {
    pub fn new(
        load_balancer_id: impl Into<String>,
        bandwidth_package_id: impl Into<String>,
    ) -> Self {
        Self {
            bandwidth_package_id: bandwidth_package_id.into(),
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        require("BandwidthPackageId", &self.bandwidth_package_id)
    }
}

// ── IPv6 internet exposure ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableLoadBalancerIpv6InternetRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl EnableLoadBalancerIpv6InternetRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableLoadBalancerIpv6InternetRequest {
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl DisableLoadBalancerIpv6InternetRequest {
    pub fn new(load_balancer_id: impl Into<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)
    }
}

// ── Security groups ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerJoinSecurityGroupRequest {
    pub load_balancer_id: String,
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl LoadBalancerJoinSecurityGroupRequest {
    pub fn new(load_balancer_id: impl Into<String>, security_group_ids: Vec<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            security_group_ids,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.security_group_ids.is_empty() {
            return Err(Error::Validation {
                field: "SecurityGroupIds",
                reason: "name at least one security group".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerLeaveSecurityGroupRequest {
    pub load_balancer_id: String,
    pub security_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl LoadBalancerLeaveSecurityGroupRequest {
    pub fn new(load_balancer_id: impl Into<String>, security_group_ids: Vec<String>) -> Self {
        Self {
            load_balancer_id: load_balancer_id.into(),
            security_group_ids,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("LoadBalancerId", &self.load_balancer_id)?;
        if self.security_group_ids.is_empty() {
            return Err(Error::Validation {
                field: "SecurityGroupIds",
                reason: "name at least one security group".into(),
            });
        }
        Ok(())
    }
}

// ── MoveResourceGroup ────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoveResourceGroupRequest {
    pub new_resource_group_id: String,
    pub resource_id: String,
    /// Resource kind, e.g. `loadbalancer`.
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

impl MoveResourceGroupRequest {
    pub fn new(
        resource_id: impl Into<String>,
        resource_type: impl Into<String>,
        new_resource_group_id: impl Into<String>,
    ) -> Self {
        Self {
            new_resource_group_id: new_resource_group_id.into(),
            resource_id: resource_id.into(),
            resource_type: resource_type.into(),
            region_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require("ResourceId", &self.resource_id)?;
        require("ResourceType", &self.resource_type)?;
        require("NewResourceGroupId", &self.new_resource_group_id)
    }
}
