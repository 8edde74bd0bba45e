//! Load balancer operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::{JobResponse, OperationResponse};
use crate::types::load_balancer::{
    AttachCommonBandwidthPackageToLoadBalancerRequest, CancelShiftLoadBalancerZonesRequest,
    CreateLoadBalancerRequest, CreateLoadBalancerResponse, DeleteLoadBalancerRequest,
    DetachCommonBandwidthPackageFromLoadBalancerRequest, DisableLoadBalancerIpv6InternetRequest,
    EnableLoadBalancerIpv6InternetRequest, GetLoadBalancerAttributeRequest,
    GetLoadBalancerAttributeResponse, ListLoadBalancersRequest, ListLoadBalancersResponse,
    LoadBalancerJoinSecurityGroupRequest, LoadBalancerLeaveSecurityGroupRequest,
    MoveResourceGroupRequest, StartShiftLoadBalancerZonesRequest,
    UpdateLoadBalancerAddressTypeConfigRequest, UpdateLoadBalancerAttributeRequest,
    UpdateLoadBalancerProtectionRequest, UpdateLoadBalancerZonesRequest,
};

impl Client {
    /// Create an NLB instance across the requested zones.
    ///
    /// Provisioning is asynchronous: the instance starts in
    /// `Provisioning` and the response carries a job handle.
    pub async fn create_load_balancer(
        &self,
        req: &CreateLoadBalancerRequest,
    ) -> Result<CreateLoadBalancerResponse, Error> {
        req.validate()?;
        self.execute("CreateLoadBalancer", rpc::to_params(req)?).await
    }

    /// Delete an instance. Fails while deletion protection is enabled.
    pub async fn delete_load_balancer(
        &self,
        req: &DeleteLoadBalancerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("DeleteLoadBalancer", rpc::to_params(req)?).await
    }

    /// Fetch the full attribute view of one instance.
    pub async fn get_load_balancer_attribute(
        &self,
        req: &GetLoadBalancerAttributeRequest,
    ) -> Result<GetLoadBalancerAttributeResponse, Error> {
        req.validate()?;
        self.execute("GetLoadBalancerAttribute", rpc::to_params(req)?)
            .await
    }

    /// List instances, token-paged. See [`Client::paginate_all`] to drain
    /// every page.
    pub async fn list_load_balancers(
        &self,
        req: &ListLoadBalancersRequest,
    ) -> Result<ListLoadBalancersResponse, Error> {
        self.execute("ListLoadBalancers", rpc::to_params(req)?).await
    }

    /// Rename, or adjust CPS limit / cross-zone forwarding.
    pub async fn update_load_balancer_attribute(
        &self,
        req: &UpdateLoadBalancerAttributeRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateLoadBalancerAttribute", rpc::to_params(req)?)
            .await
    }

    /// Switch between `Internet` and `Intranet` addressing.
    pub async fn update_load_balancer_address_type_config(
        &self,
        req: &UpdateLoadBalancerAddressTypeConfigRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateLoadBalancerAddressTypeConfig", rpc::to_params(req)?)
            .await
    }

    /// Configure deletion/modification protection.
    pub async fn update_load_balancer_protection(
        &self,
        req: &UpdateLoadBalancerProtectionRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("UpdateLoadBalancerProtection", rpc::to_params(req)?)
            .await
    }

    /// Reconcile the instance toward a new zone set.
    pub async fn update_load_balancer_zones(
        &self,
        req: &UpdateLoadBalancerZonesRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateLoadBalancerZones", rpc::to_params(req)?)
            .await
    }

    /// Drain traffic away from the named zones.
    pub async fn start_shift_load_balancer_zones(
        &self,
        req: &StartShiftLoadBalancerZonesRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("StartShiftLoadBalancerZones", rpc::to_params(req)?)
            .await
    }

    /// Restore traffic to zones previously shifted away from.
    pub async fn cancel_shift_load_balancer_zones(
        &self,
        req: &CancelShiftLoadBalancerZonesRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("CancelShiftLoadBalancerZones", rpc::to_params(req)?)
            .await
    }

    /// Bill the instance's public bandwidth through a shared bandwidth
    /// package.
    pub async fn attach_common_bandwidth_package_to_load_balancer(
        &self,
        req: &AttachCommonBandwidthPackageToLoadBalancerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute(
            "AttachCommonBandwidthPackageToLoadBalancer",
            rpc::to_params(req)?,
        )
        .await
    }

    pub async fn detach_common_bandwidth_package_from_load_balancer(
        &self,
        req: &DetachCommonBandwidthPackageFromLoadBalancerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute(
            "DetachCommonBandwidthPackageFromLoadBalancer",
            rpc::to_params(req)?,
        )
        .await
    }

    /// Expose the IPv6 side of a dual-stack instance to the internet.
    pub async fn enable_load_balancer_ipv6_internet(
        &self,
        req: &EnableLoadBalancerIpv6InternetRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("EnableLoadBalancerIpv6Internet", rpc::to_params(req)?)
            .await
    }

    /// Make the IPv6 side VPC-only again.
    pub async fn disable_load_balancer_ipv6_internet(
        &self,
        req: &DisableLoadBalancerIpv6InternetRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("DisableLoadBalancerIpv6Internet", rpc::to_params(req)?)
            .await
    }

    pub async fn load_balancer_join_security_group(
        &self,
        req: &LoadBalancerJoinSecurityGroupRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("LoadBalancerJoinSecurityGroup", rpc::to_params(req)?)
            .await
    }

    pub async fn load_balancer_leave_security_group(
        &self,
        req: &LoadBalancerLeaveSecurityGroupRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("LoadBalancerLeaveSecurityGroup", rpc::to_params(req)?)
            .await
    }

    /// Move a resource into another resource group.
    pub async fn move_resource_group(
        &self,
        req: &MoveResourceGroupRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("MoveResourceGroup", rpc::to_params(req)?).await
    }
}
