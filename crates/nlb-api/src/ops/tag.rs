//! Tag operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::OperationResponse;
use crate::types::tag::{
    ListTagResourcesRequest, ListTagResourcesResponse, TagResourcesRequest, UntagResourcesRequest,
};

impl Client {
    pub async fn tag_resources(
        &self,
        req: &TagResourcesRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("TagResources", rpc::to_params(req)?).await
    }

    pub async fn untag_resources(
        &self,
        req: &UntagResourcesRequest,
    ) -> Result<OperationResponse, Error> {
        req.validate()?;
        self.execute("UntagResources", rpc::to_params(req)?).await
    }

    /// List tag bindings, token-paged. Requires a resource-id or tag
    /// filter.
    pub async fn list_tag_resources(
        &self,
        req: &ListTagResourcesRequest,
    ) -> Result<ListTagResourcesResponse, Error> {
        req.validate()?;
        self.execute("ListTagResources", rpc::to_params(req)?).await
    }
}
