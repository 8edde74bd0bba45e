//! Region and zone discovery.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::region::{
    DescribeRegionsRequest, DescribeRegionsResponse, DescribeZonesRequest, DescribeZonesResponse,
};

impl Client {
    /// Regions where NLB is available.
    pub async fn describe_regions(
        &self,
        req: &DescribeRegionsRequest,
    ) -> Result<DescribeRegionsResponse, Error> {
        self.execute("DescribeRegions", rpc::to_params(req)?).await
    }

    /// Availability zones of one region.
    pub async fn describe_zones(
        &self,
        req: &DescribeZonesRequest,
    ) -> Result<DescribeZonesResponse, Error> {
        self.execute("DescribeZones", rpc::to_params(req)?).await
    }
}
