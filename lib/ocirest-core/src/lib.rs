//! # ocirest core
//!
//! Typed REST bindings for a few cloud infrastructure services:
//!
//! - [`identity`] - delete, list and upload the API signing keys of a user
//! - [`database`] - list the patches of a database home
//! - [`ocvp`] - list the VMware software versions supported by the VMware solution
//!
//! Every operation is a request struct implementing [`OperationRequest`]. The shared
//! executor [`ApiClient`] validates it, sends it with authentication and retries, and
//! decodes the typed response. Service clients ([`identity::IdentityClient`],
//! [`database::DatabaseClient`], [`ocvp::OcvpClient`]) wrap this in one method per
//! operation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ocirest_core::database::{DatabaseClient, ListDbHomePatchesRequest};
//! use ocirest_core::{ApiClient, Authentication, ListResponse, RetryPolicy, Service};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::builder()
//!     .for_region(Service::Database, "us-ashburn-1")?
//!     .with_authentication(Authentication::Bearer("my-token".into()))
//!     .with_retry_policy(RetryPolicy::exponential(3))
//!     .build()?;
//! let database = DatabaseClient::new(api);
//!
//! let mut request = ListDbHomePatchesRequest::new("ocid1.dbhome.oc1..aaaa").with_limit(50);
//! loop {
//!     let page = database.list_db_home_patches(request.clone()).await?;
//!     for patch in page.items() {
//!         println!("{} {}", patch.version, patch.description);
//!     }
//!     match page.next_page() {
//!         Some(cursor) => request = request.with_page(cursor),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns either its typed response or an [`ApiClientError`], classified
//! by [`ApiClientError::kind`]:
//!
//! - [`ErrorKind::InvalidArgument`] - a required parameter is missing, nothing was sent
//! - [`ErrorKind::Transport`] - the service could not be reached
//! - [`ErrorKind::Service`] - the service answered with a non-success status
//! - [`ErrorKind::Deserialization`] - the response body does not match the expected type
//! - [`ErrorKind::Configuration`] - the request could not be built
//!
//! ```rust,no_run
//! use ocirest_core::identity::IdentityClient;
//! use ocirest_core::ErrorKind;
//!
//! # async fn example(identity: IdentityClient) {
//! match identity.delete_api_key("ocid1.user.oc1..aaaa", "d4:1d:8c", None).await {
//!     Ok(response) => println!("deleted, request {:?}", response.opc_request_id),
//!     Err(err) if err.kind() == ErrorKind::Service => {
//!         eprintln!("rejected with status {:?}: {err}", err.status_code());
//!     }
//!     Err(err) => eprintln!("failed: {err}"),
//! }
//! # }
//! ```
//!
//! ## Low-level calls
//!
//! [`ApiClient::call`] and the verb shortcuts build an [`ApiCall`] directly, for
//! operations not covered by a typed request:
//!
//! ```rust,no_run
//! use ocirest_core::{ApiClient, CallPath, CallQuery};
//!
//! # async fn example(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
//! let path = CallPath::from("/20160918/users/{userId}").add_param("userId", "ocid1.user");
//! let result = client
//!     .get(path)
//!     .with_query(CallQuery::new().add_param("limit", 10))
//!     .await?;
//! let user = result.as_json::<serde_json::Value>()?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod common;
pub mod database;
pub mod identity;
pub mod ocvp;

pub use self::client::{
    ApiCall, ApiClient, ApiClientBuilder, ApiClientError, Authentication, AuthenticationError,
    CallBody, CallHeaders, CallPath, CallQuery, CallResult, ErrorKind, Output, RawResponse,
    RequestSigner, RetryPolicy, SecureString,
};
pub use self::common::{
    IfMatchOptions, ListResponse, OperationRequest, OperationResponse, RequestMetadata,
    RetryTokenOptions, Service,
};
