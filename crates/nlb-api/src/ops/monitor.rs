//! Fine-grained monitoring operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::JobResponse;
use crate::types::monitor::{
    DescribeHdMonitorRegionConfigRequest, DescribeHdMonitorRegionConfigResponse,
    UpdateHdMonitorAttributeRequest,
};

impl Client {
    /// The Log Service project/metricstore fine-grained monitoring writes
    /// to in this region.
    pub async fn describe_hd_monitor_region_config(
        &self,
        req: &DescribeHdMonitorRegionConfigRequest,
    ) -> Result<DescribeHdMonitorRegionConfigResponse, Error> {
        self.execute("DescribeHdMonitorRegionConfig", rpc::to_params(req)?)
            .await
    }

    /// Switch fine-grained monitoring on or off for one instance.
    pub async fn update_hd_monitor_attribute(
        &self,
        req: &UpdateHdMonitorAttributeRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateHdMonitorAttribute", rpc::to_params(req)?)
            .await
    }
}
