//! Database service: the patches of a database home.

mod models;
pub use self::models::{PatchAction, PatchLifecycleState, PatchSummary};

mod operations;
pub use self::operations::{ListDbHomePatchesRequest, ListDbHomePatchesResponse};

use crate::client::{ApiClient, ApiClientError};

/// Client of the database service.
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    api: ApiClient,
}

impl DatabaseClient {
    /// Creates a client sending its requests through `api`.
    ///
    /// The base URI of `api` must point at the database endpoint.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying executor.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Lists one page of the patches applicable to a database home.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when
    /// `db_home_id` is empty or `limit` is zero, before any network call.
    pub async fn list_db_home_patches(
        &self,
        request: ListDbHomePatchesRequest,
    ) -> Result<ListDbHomePatchesResponse, ApiClientError> {
        self.api.execute(&request).await
    }
}
