//! Identity service: the API signing keys of a user.
//!
//! ```rust,no_run
//! use ocirest_core::identity::IdentityClient;
//! use ocirest_core::{ApiClient, IfMatchOptions, Service};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::builder().for_region(Service::Identity, "us-phoenix-1")?.build()?;
//! let identity = IdentityClient::new(api);
//!
//! let keys = identity.list_api_keys("ocid1.user.oc1..aaaa").await?;
//! for fingerprint in keys.items.iter().filter_map(|key| key.fingerprint.as_deref()) {
//!     identity
//!         .delete_api_key("ocid1.user.oc1..aaaa", fingerprint, Some(IfMatchOptions::default()))
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```

mod models;
pub use self::models::{ApiKey, ApiKeyLifecycleState, CreateApiKeyDetails};

mod operations;
pub use self::operations::{
    DeleteApiKeyRequest, DeleteApiKeyResponse, ListApiKeysRequest, ListApiKeysResponse,
    UploadApiKeyRequest, UploadApiKeyResponse,
};

use crate::client::{ApiClient, ApiClientError};
use crate::common::{IfMatchOptions, RetryTokenOptions};

/// Client of the identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    api: ApiClient,
}

impl IdentityClient {
    /// Creates a client sending its requests through `api`.
    ///
    /// The base URI of `api` must point at the identity endpoint.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying executor, to run requests with
    /// [`ApiClient::execute`].
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Deletes the API key with the given fingerprint.
    ///
    /// Without an `if-match` etag in `options`, the key is deleted unconditionally.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    /// `user_id` or `fingerprint` is empty, before any network call.
    pub async fn delete_api_key(
        &self,
        user_id: &str,
        fingerprint: &str,
        options: Option<IfMatchOptions>,
    ) -> Result<DeleteApiKeyResponse, ApiClientError> {
        let request = DeleteApiKeyRequest::new(user_id, fingerprint).with_options(options);
        self.api.execute(&request).await
    }

    /// Lists the API signing keys of a user.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    /// `user_id` is empty, before any network call.
    pub async fn list_api_keys(&self, user_id: &str) -> Result<ListApiKeysResponse, ApiClientError> {
        self.api.execute(&ListApiKeysRequest::new(user_id)).await
    }

    /// Uploads a PEM-format RSA public key for a user.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    /// `user_id` or `key` is empty, before any network call.
    pub async fn upload_api_key(
        &self,
        user_id: &str,
        key: &str,
        options: Option<RetryTokenOptions>,
    ) -> Result<UploadApiKeyResponse, ApiClientError> {
        let request = UploadApiKeyRequest::new(user_id, key).with_options(options);
        self.api.execute(&request).await
    }
}
