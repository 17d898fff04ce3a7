use http::{Method, Uri};

mod builder;
pub use self::builder::ApiClientBuilder;

mod call;
pub use self::call::ApiCall;

mod parameters;
pub use self::parameters::{CallBody, CallHeaders, CallPath, CallQuery};

mod auth;
pub use self::auth::{Authentication, AuthenticationError, RequestSigner, SecureString};

mod retry;
pub use self::retry::RetryPolicy;

mod output;
pub use self::output::Output;

mod result;
pub use self::result::{CallResult, RawResponse};

mod error;
pub use self::error::{ApiClientError, ErrorKind};

use crate::common::{OperationRequest, OperationResponse};

/// The shared HTTP executor behind every service client.
///
/// An `ApiClient` holds the transport, the base URI of one service endpoint, the
/// authentication and the default retry policy. It is cheap to clone: clones share the
/// connection pool. Use [`ApiClientBuilder`] to create instances.
///
/// # Example
///
/// ```rust,no_run
/// use ocirest_core::ApiClient;
/// use ocirest_core::identity::ListApiKeysRequest;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_host("identity.example.com")
///     .build()?;
///
/// let response = client.execute(&ListApiKeysRequest::new("ocid1.user.oc1..aaaa")).await?;
/// for key in &response.items {
///     println!("{:?}", key.fingerprint);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_uri: Uri,
    authentication: Option<Authentication>,
    retry_policy: RetryPolicy,
}

// Create
impl ApiClient {
    /// Starts configuring a client, see [`ApiClientBuilder`].
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Returns the base URI every operation path is resolved against.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    /// Returns the default retry policy.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

impl ApiClient {
    /// Prepares a call on a path relative to the base URI.
    ///
    /// The call inherits the authentication and retry policy of the client; it is sent when
    /// awaited.
    pub fn call(&self, method: Method, path: impl Into<CallPath>) -> ApiCall {
        ApiCall::build(
            self.client.clone(),
            self.base_uri.clone(),
            method,
            path.into(),
            self.authentication.clone(),
            self.retry_policy.clone(),
        )
    }

    /// Prepares a `GET` call.
    pub fn get(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::GET, path)
    }

    /// Prepares a `POST` call.
    pub fn post(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::POST, path)
    }

    /// Prepares a `PUT` call.
    pub fn put(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::PUT, path)
    }

    /// Prepares a `DELETE` call.
    pub fn delete(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::DELETE, path)
    }
}

impl ApiClient {
    /// Validates, sends and decodes one operation.
    ///
    /// Validation runs before the call is built: a missing required parameter fails with
    /// [`ErrorKind::InvalidArgument`] without any network traffic.
    ///
    /// # Errors
    ///
    /// Any [`ApiClientError`], see [`ApiClientError::kind`] to classify it.
    pub async fn execute<R>(&self, request: &R) -> Result<R::Response, ApiClientError>
    where
        R: OperationRequest,
    {
        let call = request.to_call(self)?;
        let result = call.await?;
        R::Response::from_result(result)
    }
}
