//! Server group operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::JobResponse;
use crate::types::server_group::{
    AddServersToServerGroupRequest, CreateServerGroupRequest, CreateServerGroupResponse,
    DeleteServerGroupRequest, ListServerGroupServersRequest, ListServerGroupServersResponse,
    ListServerGroupsRequest, ListServerGroupsResponse, RemoveServersFromServerGroupRequest,
    ServerGroupJobResponse, UpdateServerGroupAttributeRequest,
    UpdateServerGroupServersAttributeRequest,
};

impl Client {
    pub async fn create_server_group(
        &self,
        req: &CreateServerGroupRequest,
    ) -> Result<CreateServerGroupResponse, Error> {
        req.validate()?;
        self.execute("CreateServerGroup", rpc::to_params(req)?).await
    }

    /// Delete a server group. Fails while any listener still forwards to
    /// it.
    pub async fn delete_server_group(
        &self,
        req: &DeleteServerGroupRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("DeleteServerGroup", rpc::to_params(req)?).await
    }

    /// List server groups, token-paged.
    pub async fn list_server_groups(
        &self,
        req: &ListServerGroupsRequest,
    ) -> Result<ListServerGroupsResponse, Error> {
        self.execute("ListServerGroups", rpc::to_params(req)?).await
    }

    pub async fn update_server_group_attribute(
        &self,
        req: &UpdateServerGroupAttributeRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateServerGroupAttribute", rpc::to_params(req)?)
            .await
    }

    /// Register backends with a server group.
    pub async fn add_servers_to_server_group(
        &self,
        req: &AddServersToServerGroupRequest,
    ) -> Result<ServerGroupJobResponse, Error> {
        req.validate()?;
        self.execute("AddServersToServerGroup", rpc::to_params(req)?)
            .await
    }

    /// Deregister backends. In-flight connections drain per the group's
    /// connection-drain settings.
    pub async fn remove_servers_from_server_group(
        &self,
        req: &RemoveServersFromServerGroupRequest,
    ) -> Result<ServerGroupJobResponse, Error> {
        req.validate()?;
        self.execute("RemoveServersFromServerGroup", rpc::to_params(req)?)
            .await
    }

    /// Adjust weight/port/description of already-registered backends.
    pub async fn update_server_group_servers_attribute(
        &self,
        req: &UpdateServerGroupServersAttributeRequest,
    ) -> Result<ServerGroupJobResponse, Error> {
        req.validate()?;
        self.execute("UpdateServerGroupServersAttribute", rpc::to_params(req)?)
            .await
    }

    /// List the backends of one server group, token-paged.
    pub async fn list_server_group_servers(
        &self,
        req: &ListServerGroupServersRequest,
    ) -> Result<ListServerGroupServersResponse, Error> {
        req.validate()?;
        self.execute("ListServerGroupServers", rpc::to_params(req)?)
            .await
    }
}
