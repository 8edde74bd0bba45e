//! Request and response types for every NLB operation, grouped by
//! resource area.
//!
//! Conventions across all of them:
//! - Wire names are `PascalCase`; the handful of irregular spellings
//!   (`DNSName`, `PrivateIPv4Address`, `LoadbalancerId`) carry explicit
//!   renames.
//! - Unset optional request fields are omitted from serialization, so
//!   they never reach the wire.
//! - Mutating requests carry `client_token` (idempotency key; the service
//!   defaults it to the request id) and `dry_run` (validate-only mode —
//!   see [`crate::Error::is_dry_run_ok`]).
//! - `validate()` runs the client-side required-field checks before a
//!   request is dispatched.

pub mod common;
pub mod job;
pub mod listener;
pub mod load_balancer;
pub mod monitor;
pub mod region;
pub mod security_policy;
pub mod server_group;
pub mod tag;

use crate::error::Error;

/// Reject an empty required field.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Validation {
            field,
            reason: "required field is empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::common::{AddressType, ServerType};
    use super::listener::ProxyProtocolV2Config;
    use super::load_balancer::{CreateLoadBalancerRequest, ZoneMappingRequest};
    use super::server_group::{AddServersToServerGroupRequest, ServerRequest};
    use super::tag::{ListTagResourcesRequest, TagResourcesRequest};
    use crate::types::common::{Tag, TagResourceType};

    #[test]
    fn create_load_balancer_requires_zone_mappings() {
        let req = CreateLoadBalancerRequest::new(AddressType::Intranet, "vpc-123", Vec::new());
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("ZoneMappings"));
    }

    #[test]
    fn create_load_balancer_requires_vswitch_per_zone() {
        let mut mapping = ZoneMappingRequest::new("cn-hangzhou-a", "vsw-1");
        mapping.v_switch_id.clear();
        let req =
            CreateLoadBalancerRequest::new(AddressType::Intranet, "vpc-123", vec![mapping]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn add_servers_rejects_missing_server_id() {
        let server = ServerRequest::new("", ServerType::Ecs);
        let req = AddServersToServerGroupRequest::new("sgp-1", vec![server]);
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("ServerId"));
    }

    #[test]
    fn add_servers_rejects_out_of_range_weight() {
        let mut server = ServerRequest::new("i-abc", ServerType::Ecs);
        server.weight = Some(500);
        let req = AddServersToServerGroupRequest::new("sgp-1", vec![server]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn tag_resources_requires_keys() {
        let req = TagResourcesRequest::new(
            TagResourceType::LoadBalancer,
            vec!["nlb-1".into()],
            vec![Tag {
                key: None,
                value: Some("v".into()),
            }],
        );
        assert!(req.validate().is_err());
    }

    #[test]
    fn list_tag_resources_needs_some_filter() {
        let req = ListTagResourcesRequest::new(TagResourceType::Listener);
        assert!(req.validate().is_err());

        let mut with_ids = ListTagResourcesRequest::new(TagResourceType::Listener);
        with_ids.resource_id.push("lsn-1".into());
        assert!(with_ids.validate().is_ok());
    }

    #[test]
    fn proxy_protocol_config_skips_unset_fields() {
        let config = ProxyProtocolV2Config {
            ppv2_vpc_id_enabled: Some(true),
            ..ProxyProtocolV2Config::default()
        };
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"Ppv2VpcIdEnabled":true}"#
        );
    }
}
