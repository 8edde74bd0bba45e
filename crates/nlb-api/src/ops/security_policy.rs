//! TLS security policy operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::JobResponse;
use crate::types::security_policy::{
    CreateSecurityPolicyRequest, CreateSecurityPolicyResponse, DeleteSecurityPolicyRequest,
    ListSecurityPolicyRequest, ListSecurityPolicyResponse, ListSystemSecurityPolicyRequest,
    ListSystemSecurityPolicyResponse, UpdateSecurityPolicyAttributeRequest,
    UpdateSecurityPolicyAttributeResponse,
};

impl Client {
    /// Create a custom TLS policy for `TCPSSL` listeners.
    pub async fn create_security_policy(
        &self,
        req: &CreateSecurityPolicyRequest,
    ) -> Result<CreateSecurityPolicyResponse, Error> {
        req.validate()?;
        self.execute("CreateSecurityPolicy", rpc::to_params(req)?).await
    }

    pub async fn update_security_policy_attribute(
        &self,
        req: &UpdateSecurityPolicyAttributeRequest,
    ) -> Result<UpdateSecurityPolicyAttributeResponse, Error> {
        req.validate()?;
        self.execute("UpdateSecurityPolicyAttribute", rpc::to_params(req)?)
            .await
    }

    /// Delete a custom policy. Fails while any listener references it.
    pub async fn delete_security_policy(
        &self,
        req: &DeleteSecurityPolicyRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("DeleteSecurityPolicy", rpc::to_params(req)?).await
    }

    /// List custom policies, token-paged.
    pub async fn list_security_policy(
        &self,
        req: &ListSecurityPolicyRequest,
    ) -> Result<ListSecurityPolicyResponse, Error> {
        self.execute("ListSecurityPolicy", rpc::to_params(req)?).await
    }

    /// List the predefined `tls_cipher_policy_*` policies.
    pub async fn list_system_security_policy(
        &self,
        req: &ListSystemSecurityPolicyRequest,
    ) -> Result<ListSystemSecurityPolicyResponse, Error> {
        self.execute("ListSystemSecurityPolicy", rpc::to_params(req)?)
            .await
    }
}
