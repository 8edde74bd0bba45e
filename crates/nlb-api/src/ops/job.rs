//! Asynchronous job operations.

use crate::client::Client;
use crate::error::Error;
use crate::rpc;
use crate::types::job::{
    GetJobStatusRequest, GetJobStatusResponse, ListAsynJobsRequest, ListAsynJobsResponse,
};

impl Client {
    /// Current status of one asynchronous job.
    ///
    /// See [`Client::wait_for_job`] for a ready-made polling loop.
    pub async fn get_job_status(
        &self,
        req: &GetJobStatusRequest,
    ) -> Result<GetJobStatusResponse, Error> {
        req.validate()?;
        self.execute("GetJobStatus", rpc::to_params(req)?).await
    }

    /// Status of a batch of jobs, token-paged.
    pub async fn list_asyn_jobs(
        &self,
        req: &ListAsynJobsRequest,
    ) -> Result<ListAsynJobsResponse, Error> {
        req.validate()?;
        self.execute("ListAsynJobs", rpc::to_params(req)?).await
    }
}
