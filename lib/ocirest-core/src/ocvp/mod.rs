//! Oracle Cloud VMware Solution: the bundled software versions.

mod models;
pub use self::models::{
    SupportedVmwareSoftwareVersionCollection, SupportedVmwareSoftwareVersionSummary,
};

mod operations;
pub use self::operations::{
    ListSupportedVmwareSoftwareVersionsRequest, ListSupportedVmwareSoftwareVersionsResponse,
};

use crate::client::{ApiClient, ApiClientError};

/// Client of the VMware solution service.
#[derive(Debug, Clone)]
pub struct OcvpClient {
    api: ApiClient,
}

impl OcvpClient {
    /// Creates a client sending its requests through `api`.
    ///
    /// The base URI of `api` must point at the VMware solution endpoint.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying executor.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Lists one page of the VMware software versions supported in a compartment.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    /// `compartment_id` is empty, before any network call.
    pub async fn list_supported_vmware_software_versions(
        &self,
        request: ListSupportedVmwareSoftwareVersionsRequest,
    ) -> Result<ListSupportedVmwareSoftwareVersionsResponse, ApiClientError> {
        self.api.execute(&request).await
    }
}
