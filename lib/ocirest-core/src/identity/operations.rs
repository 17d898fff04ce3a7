use crate::client::{ApiCall, ApiClient, ApiClientError, CallPath, CallResult, RawResponse};
use crate::common::headers::OPC_REQUEST_ID;
use crate::common::{
    IfMatchOptions, ListResponse, OperationRequest, OperationResponse, RequestMetadata,
    RetryTokenOptions, required,
};

use super::{ApiKey, CreateApiKeyDetails};

const API_KEYS_PATH: &str = "/20160918/users/{userId}/apiKeys/";
const API_KEY_PATH: &str = "/20160918/users/{userId}/apiKeys/{fingerprint}";

// =============================================================================
// DeleteApiKey
// =============================================================================

/// Deletes the API key with the given fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteApiKeyRequest {
    /// The OCID of the user.
    pub user_id: String,
    /// The key's fingerprint.
    pub fingerprint: String,
    /// Sends `if-match` when an etag is set.
    pub options: Option<IfMatchOptions>,
    /// Unique identifier of the request, sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Client-side settings, never sent.
    pub metadata: RequestMetadata,
}

impl DeleteApiKeyRequest {
    /// Creates a request with its required parameters.
    pub fn new(user_id: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            fingerprint: fingerprint.into(),
            ..Self::default()
        }
    }

    /// Sets the optional parameters.
    pub fn with_options(mut self, options: Option<IfMatchOptions>) -> Self {
        self.options = options;
        self
    }
}

impl OperationRequest for DeleteApiKeyRequest {
    type Response = DeleteApiKeyResponse;

    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError> {
        let user_id = required("userId", &self.user_id)?;
        let fingerprint = required("fingerprint", &self.fingerprint)?;

        let path = CallPath::from(API_KEY_PATH)
            .add_param("userId", user_id)
            .add_param("fingerprint", fingerprint);
        let headers = self
            .options
            .as_ref()
            .map(IfMatchOptions::to_headers)
            .unwrap_or_default();

        Ok(client
            .delete(path)
            .with_headers(headers)
            .with_optional_header(OPC_REQUEST_ID, self.opc_request_id.as_deref())
            .with_retry_policy_option(self.metadata.retry_policy.as_ref()))
    }
}

/// The response of [`DeleteApiKeyRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteApiKeyResponse {
    /// Status code and headers of the call.
    pub raw_response: RawResponse,
    /// The `opc-request-id` of the call, echoed by the service.
    pub opc_request_id: Option<String>,
}

impl OperationResponse for DeleteApiKeyResponse {
    fn from_result(result: CallResult) -> Result<Self, ApiClientError> {
        let raw_response = result.as_empty();
        let opc_request_id = raw_response.opc_request_id().map(ToString::to_string);

        Ok(Self {
            raw_response,
            opc_request_id,
        })
    }
}

// =============================================================================
// ListApiKeys
// =============================================================================

/// Lists the API signing keys of a user.
///
/// The service returns every key of the user (at most three) in a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApiKeysRequest {
    /// The OCID of the user.
    pub user_id: String,
    /// Unique identifier of the request, sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Client-side settings, never sent.
    pub metadata: RequestMetadata,
}

impl ListApiKeysRequest {
    /// Creates a request with its required parameters.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

impl OperationRequest for ListApiKeysRequest {
    type Response = ListApiKeysResponse;

    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError> {
        let user_id = required("userId", &self.user_id)?;

        let path = CallPath::from(API_KEYS_PATH).add_param("userId", user_id);

        Ok(client
            .get(path)
            .with_optional_header(OPC_REQUEST_ID, self.opc_request_id.as_deref())
            .with_retry_policy_option(self.metadata.retry_policy.as_ref()))
    }
}

/// The response of [`ListApiKeysRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListApiKeysResponse {
    /// Status code and headers of the call.
    pub raw_response: RawResponse,
    /// The keys of the user.
    pub items: Vec<ApiKey>,
    /// The `opc-request-id` of the call, echoed by the service.
    pub opc_request_id: Option<String>,
    /// Cursor of the next page, absent on the last page.
    pub opc_next_page: Option<String>,
}

impl OperationResponse for ListApiKeysResponse {
    fn from_result(result: CallResult) -> Result<Self, ApiClientError> {
        let items = result.as_json::<Vec<ApiKey>>()?;
        let raw_response = result.into_raw();

        Ok(Self {
            opc_request_id: raw_response.opc_request_id().map(ToString::to_string),
            opc_next_page: raw_response.opc_next_page().map(ToString::to_string),
            raw_response,
            items,
        })
    }
}

impl ListResponse for ListApiKeysResponse {
    type Item = ApiKey;

    fn items(&self) -> &[ApiKey] {
        &self.items
    }

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }
}

// =============================================================================
// UploadApiKey
// =============================================================================

/// Uploads a PEM-format RSA public key for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadApiKeyRequest {
    /// The OCID of the user.
    pub user_id: String,
    /// The public key, in PEM format.
    pub key: String,
    /// Sends `opc-retry-token` when a token is set.
    pub options: Option<RetryTokenOptions>,
    /// Unique identifier of the request, sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Client-side settings, never sent.
    pub metadata: RequestMetadata,
}

impl UploadApiKeyRequest {
    /// Creates a request with its required parameters.
    pub fn new(user_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            key: key.into(),
            ..Self::default()
        }
    }

    /// Sets the optional parameters.
    pub fn with_options(mut self, options: Option<RetryTokenOptions>) -> Self {
        self.options = options;
        self
    }
}

impl OperationRequest for UploadApiKeyRequest {
    type Response = UploadApiKeyResponse;

    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError> {
        let user_id = required("userId", &self.user_id)?;
        let key = required("key", &self.key)?;

        let path = CallPath::from(API_KEYS_PATH).add_param("userId", user_id);
        let headers = self
            .options
            .as_ref()
            .map(RetryTokenOptions::to_headers)
            .unwrap_or_default();
        let details = CreateApiKeyDetails {
            key: key.to_string(),
        };

        client
            .post(path)
            .with_headers(headers)
            .with_optional_header(OPC_REQUEST_ID, self.opc_request_id.as_deref())
            .with_retry_policy_option(self.metadata.retry_policy.as_ref())
            .json(&details)
    }
}

/// The response of [`UploadApiKeyRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadApiKeyResponse {
    /// Status code and headers of the call.
    pub raw_response: RawResponse,
    /// The uploaded key.
    pub api_key: ApiKey,
    /// The etag of the key, for `if-match` on a later delete.
    pub etag: Option<String>,
    /// The `opc-request-id` of the call, echoed by the service.
    pub opc_request_id: Option<String>,
}

impl OperationResponse for UploadApiKeyResponse {
    fn from_result(result: CallResult) -> Result<Self, ApiClientError> {
        let api_key = result.as_json::<ApiKey>()?;
        let raw_response = result.into_raw();

        Ok(Self {
            etag: raw_response.etag().map(ToString::to_string),
            opc_request_id: raw_response.opc_request_id().map(ToString::to_string),
            raw_response,
            api_key,
        })
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
    fn test_delete_requires_user_and_fingerprint() {
        let error = DeleteApiKeyRequest::new("", "d4:1d:8c")
            .to_call(&client())
            .expect_err("missing user");
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        let error = DeleteApiKeyRequest::new("ocid1.user", "")
            .to_call(&client())
            .expect_err("missing fingerprint");
        insta::assert_snapshot!(error, @"Invalid argument 'fingerprint': must not be empty");
    }

    #[test]
    fn test_upload_requires_key() {
        let error = UploadApiKeyRequest::new("ocid1.user", "")
            .to_call(&client())
            .expect_err("missing key");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_list_requires_user() {
        let error = ListApiKeysRequest::new("")
            .to_call(&client())
            .expect_err("missing user");

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_delete_call_if_match_header_only_when_set() {
        let call = DeleteApiKeyRequest::new("ocid1.user", "d4:1d:8c")
            .to_call(&client())
            .expect("valid call");
        let debug = format!("{call:?}");
        assert!(debug.contains("/20160918/users/{userId}/apiKeys/{fingerprint}"), "{debug}");
        assert!(!debug.contains("if-match"), "{debug}");

        let call = DeleteApiKeyRequest::new("ocid1.user", "d4:1d:8c")
            .with_options(Some(IfMatchOptions::new("etag-1")))
            .to_call(&client())
            .expect("valid call");
        let debug = format!("{call:?}");
        assert!(debug.contains("if-match"), "{debug}");
        assert!(debug.contains("etag-1"), "{debug}");
    }
}
