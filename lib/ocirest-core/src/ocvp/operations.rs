use crate::client::{ApiCall, ApiClient, ApiClientError, CallQuery, CallResult, RawResponse};
use crate::common::headers::OPC_REQUEST_ID;
use crate::common::{ListResponse, OperationRequest, OperationResponse, RequestMetadata, required};

use super::{SupportedVmwareSoftwareVersionCollection, SupportedVmwareSoftwareVersionSummary};

const SUPPORTED_VERSIONS_PATH: &str = "/20200501/supportedVmwareSoftwareVersions";

/// Lists the versions of bundled VMware software available in a compartment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSupportedVmwareSoftwareVersionsRequest {
    /// The OCID of the compartment.
    pub compartment_id: String,
    /// The maximum number of items to return per page.
    pub limit: Option<u32>,
    /// The cursor returned as `opc-next-page` by the previous page.
    pub page: Option<String>,
    /// Unique identifier of the request, sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Client-side settings, never sent.
    pub metadata: RequestMetadata,
}

impl ListSupportedVmwareSoftwareVersionsRequest {
    /// Creates a request with its required parameters.
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Self::default()
        }
    }

    /// Sets the page size, at least 1.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continues the listing from a previous `opc-next-page` cursor.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

impl OperationRequest for ListSupportedVmwareSoftwareVersionsRequest {
    type Response = ListSupportedVmwareSoftwareVersionsResponse;

    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError> {
        let compartment_id = required("compartmentId", &self.compartment_id)?;
        if self.limit == Some(0) {
            return Err(ApiClientError::invalid_argument(
                "limit",
                "must be at least 1",
            ));
        }

        let query = CallQuery::new()
            .add_param("compartmentId", compartment_id)
            .add_optional_param("limit", self.limit)
            .add_optional_param("page", self.page.as_deref());

        Ok(client
            .get(SUPPORTED_VERSIONS_PATH)
            .with_query(query)
            .with_optional_header(OPC_REQUEST_ID, self.opc_request_id.as_deref())
            .with_retry_policy_option(self.metadata.retry_policy.as_ref()))
    }
}

/// The response of [`ListSupportedVmwareSoftwareVersionsRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListSupportedVmwareSoftwareVersionsResponse {
    /// Status code and headers of the call.
    pub raw_response: RawResponse,
    /// The page of versions.
    pub collection: SupportedVmwareSoftwareVersionCollection,
    /// The `opc-request-id` of the call, echoed by the service.
    pub opc_request_id: Option<String>,
    /// Cursor of the next page, absent on the last page.
    pub opc_next_page: Option<String>,
}

impl OperationResponse for ListSupportedVmwareSoftwareVersionsResponse {
    fn from_result(result: CallResult) -> Result<Self, ApiClientError> {
        let collection = result.as_json::<SupportedVmwareSoftwareVersionCollection>()?;
        let raw_response = result.into_raw();

        Ok(Self {
            opc_request_id: raw_response.opc_request_id().map(ToString::to_string),
            opc_next_page: raw_response.opc_next_page().map(ToString::to_string),
            raw_response,
            collection,
        })
    }
}

impl ListResponse for ListSupportedVmwareSoftwareVersionsResponse {
    type Item = SupportedVmwareSoftwareVersionSummary;

    fn items(&self) -> &[SupportedVmwareSoftwareVersionSummary] {
        &self.collection.items
    }

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_requires_compartment_id() {
        let client = ApiClient::builder().build().expect("valid client");

        let error = ListSupportedVmwareSoftwareVersionsRequest::new("")
            .with_limit(10)
            .to_call(&client)
            .expect_err("missing compartment");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        insta::assert_snapshot!(error, @"Invalid argument 'compartmentId': must not be empty");
    }
}
