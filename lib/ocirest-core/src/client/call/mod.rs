use http::{Method, Uri};

use super::{Authentication, CallBody, CallHeaders, CallPath, CallQuery, RetryPolicy};

pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

mod builder;
mod execution;

/// A pending HTTP call: the request descriptor handed to the executor.
///
/// `ApiCall` is created by [`ApiClient::call`](super::ApiClient::call) (or one of the verb
/// shortcuts) and configured with a fluent interface. It is consumed exactly once, by
/// awaiting it.
///
/// # Method Groups
///
/// ## Parameter Methods
/// - [`with_query(query)`](Self::with_query) - Set query parameters
/// - [`with_headers(headers)`](Self::with_headers) - Merge request headers
/// - [`with_header(name, value)`](Self::with_header) - Add single header
///
/// ## Request Body Methods
/// - [`json(data)`](Self::json) - Set JSON request body
/// - [`with_body(body)`](Self::with_body) - Set a prepared body
///
/// ## Executor Configuration
/// - [`with_retry_policy(policy)`](Self::with_retry_policy) - Override the client retry policy
///
/// ## Execution
/// - `.await` - Send the request and return a [`CallResult`](super::CallResult)
///
/// # Example
///
/// ```rust,no_run
/// use ocirest_core::{ApiClient, CallPath};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_host("identity.example.com").build()?;
///
/// let path = CallPath::from("/20160918/users/{userId}/apiKeys/").add_param("userId", "ocid1.user");
/// let result = client.get(path).with_header("opc-request-id", "my-request").await?;
/// println!("{:?}", result.raw().opc_request_id());
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct ApiCall {
    #[debug(skip)]
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Uri,

    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) query: CallQuery,
    pub(super) headers: CallHeaders,
    pub(super) body: Option<CallBody>,

    pub(super) authentication: Option<Authentication>,
    pub(super) retry_policy: RetryPolicy,
}
