//! Listener operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::JobResponse;
use crate::types::listener::{
    AssociateAdditionalCertificatesWithListenerRequest, CreateListenerRequest,
    CreateListenerResponse, DeleteListenerRequest,
    DisassociateAdditionalCertificatesWithListenerRequest, GetListenerAttributeRequest,
    GetListenerAttributeResponse, GetListenerHealthStatusRequest,
    GetListenerHealthStatusResponse, ListListenerCertificatesRequest,
    ListListenerCertificatesResponse, ListListenersRequest, ListListenersResponse,
    StartListenerRequest, StopListenerRequest, UpdateListenerAttributeRequest,
};

impl Client {
    /// Bind a port (or port range) on a load balancer to a server group.
    pub async fn create_listener(
        &self,
        req: &CreateListenerRequest,
    ) -> Result<CreateListenerResponse, Error> {
        req.validate()?;
        self.execute("CreateListener", rpc::to_params(req)?).await
    }

    pub async fn delete_listener(
        &self,
        req: &DeleteListenerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("DeleteListener", rpc::to_params(req)?).await
    }

    /// Start a stopped listener.
    pub async fn start_listener(&self, req: &StartListenerRequest) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("StartListener", rpc::to_params(req)?).await
    }

    /// Stop a running listener; new connections are refused until it is
    /// started again.
    pub async fn stop_listener(&self, req: &StopListenerRequest) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("StopListener", rpc::to_params(req)?).await
    }

    pub async fn get_listener_attribute(
        &self,
        req: &GetListenerAttributeRequest,
    ) -> Result<GetListenerAttributeResponse, Error> {
        req.validate()?;
        self.execute("GetListenerAttribute", rpc::to_params(req)?).await
    }

    /// List listeners, token-paged.
    pub async fn list_listeners(
        &self,
        req: &ListListenersRequest,
    ) -> Result<ListListenersResponse, Error> {
        self.execute("ListListeners", rpc::to_params(req)?).await
    }

    pub async fn update_listener_attribute(
        &self,
        req: &UpdateListenerAttributeRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute("UpdateListenerAttribute", rpc::to_params(req)?)
            .await
    }

    /// Health of the backends behind a listener. Only backends that are
    /// not `Normal` are reported.
    pub async fn get_listener_health_status(
        &self,
        req: &GetListenerHealthStatusRequest,
    ) -> Result<GetListenerHealthStatusResponse, Error> {
        req.validate()?;
        self.execute("GetListenerHealthStatus", rpc::to_params(req)?)
            .await
    }

    /// Attach additional (SNI) server certificates to a `TCPSSL`
    /// listener.
    pub async fn associate_additional_certificates_with_listener(
        &self,
        req: &AssociateAdditionalCertificatesWithListenerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute(
            "AssociateAdditionalCertificatesWithListener",
            rpc::to_params(req)?,
        )
        .await
    }

    pub async fn disassociate_additional_certificates_with_listener(
        &self,
        req: &DisassociateAdditionalCertificatesWithListenerRequest,
    ) -> Result<JobResponse, Error> {
        req.validate()?;
        self.execute(
            "DisassociateAdditionalCertificatesWithListener",
            rpc::to_params(req)?,
        )
        .await
    }

    pub async fn list_listener_certificates(
        &self,
        req: &ListListenerCertificatesRequest,
    ) -> Result<ListListenerCertificatesResponse, Error> {
        req.validate()?;
        self.execute("ListListenerCertificates", rpc::to_params(req)?)
            .await
    }
}
