use crate::client::{
    ApiCall, ApiClient, ApiClientError, CallPath, CallQuery, CallResult, RawResponse,
};
use crate::common::headers::OPC_REQUEST_ID;
use crate::common::{ListResponse, OperationRequest, OperationResponse, RequestMetadata, required};

use super::PatchSummary;

const DB_HOME_PATCHES_PATH: &str = "/20160918/dbHomes/{dbHomeId}/patches";

/// Lists the patches applicable to a database home, one page at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDbHomePatchesRequest {
    /// The OCID of the database home.
    pub db_home_id: String,
    /// The maximum number of items to return per page.
    pub limit: Option<u32>,
    /// The cursor returned as `opc-next-page` by the previous page.
    pub page: Option<String>,
    /// Unique identifier of the request, sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Client-side settings, never sent.
    pub metadata: RequestMetadata,
}

impl ListDbHomePatchesRequest {
    /// Creates a request with its required parameters.
    pub fn new(db_home_id: impl Into<String>) -> Self {
        Self {
            db_home_id: db_home_id.into(),
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

    /// Sets the `opc-request-id` header.
    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }
}

impl OperationRequest for ListDbHomePatchesRequest {
    type Response = ListDbHomePatchesResponse;

    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError> {
        let db_home_id = required("dbHomeId", &self.db_home_id)?;
        if self.limit == Some(0) {
            return Err(ApiClientError::invalid_argument(
                "limit",
                "must be at least 1",
            ));
        }

        let path = CallPath::from(DB_HOME_PATCHES_PATH).add_param("dbHomeId", db_home_id);
        let query = CallQuery::new()
            .add_optional_param("limit", self.limit)
            .add_optional_param("page", self.page.as_deref());

        Ok(client
            .get(path)
            .with_query(query)
            .with_optional_header(OPC_REQUEST_ID, self.opc_request_id.as_deref())
            .with_retry_policy_option(self.metadata.retry_policy.as_ref()))
    }
}

/// The response of [`ListDbHomePatchesRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListDbHomePatchesResponse {
    /// Status code and headers of the call.
    pub raw_response: RawResponse,
    /// The page items, in server order.
    pub items: Vec<PatchSummary>,
    /// The `opc-request-id` of the call, echoed by the service.
    pub opc_request_id: Option<String>,
    /// Present when more items remain: pass it as `page` to get them.
    pub opc_next_page: Option<String>,
}

impl OperationResponse for ListDbHomePatchesResponse {
    fn from_result(result: CallResult) -> Result<Self, ApiClientError> {
        let items = result.as_json::<Vec<PatchSummary>>()?;
        let raw_response = result.into_raw();

        Ok(Self {
            opc_request_id: raw_response.opc_request_id().map(ToString::to_string),
            opc_next_page: raw_response.opc_next_page().map(ToString::to_string),
            raw_response,
            items,
        })
    }
}

impl ListResponse for ListDbHomePatchesResponse {
    type Item = PatchSummary;

    fn items(&self) -> &[PatchSummary] {
        &self.items
    }

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn client() -> ApiClient {
        ApiClient::builder().build().expect("valid client")
    }

    #[test]
    fn test_requires_db_home_id() {
        let error = ListDbHomePatchesRequest::new("")
            .to_call(&client())
            .expect_err("missing db home");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        insta::assert_snapshot!(error, @"Invalid argument 'dbHomeId': must not be empty");
    }

    #[test]
    fn test_rejects_zero_limit() {
        let error = ListDbHomePatchesRequest::new("ocid1.dbhome")
            .with_limit(0)
            .to_call(&client())
            .expect_err("zero limit");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_query_has_only_given_parameters() {
        let call = ListDbHomePatchesRequest::new("ocid1.dbhome")
            .with_page("cursor-2")
            .to_call(&client())
            .expect("valid call");

        let debug = format!("{call:?}");
        assert!(debug.contains("cursor-2"), "{debug}");
        assert!(!debug.contains("\"limit\""), "{debug}");
    }
}
