use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};

use http::Uri;
use http::uri::{PathAndQuery, Scheme};

use super::{ApiClient, ApiClientError, Authentication, RetryPolicy};
use crate::common::Service;

/// Builder for creating [`ApiClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP (use `with_scheme()` to change to HTTPS)
/// - **Host**: 127.0.0.1 (localhost)
/// - **Port**: 80 (standard HTTP port)
/// - **Base path**: None (requests go to root path)
/// - **Authentication**: None
/// - **Retry policy**: a single attempt, see [`RetryPolicy::no_retry`]
///
/// # Example
///
/// ```rust
/// use ocirest_core::{ApiClient, Authentication, RetryPolicy, Service};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .for_region(Service::Identity, "us-ashburn-1")?
///     .with_authentication(Authentication::Bearer("my-token".into()))
///     .with_retry_policy(RetryPolicy::exponential(3))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: reqwest::Client,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    authentication: Option<Authentication>,
    retry_policy: RetryPolicy,
}

impl ApiClientBuilder {
    /// Builds the final `ApiClient` instance with all configured settings.
    ///
    /// # Errors
    ///
    /// This method can fail if the base URI cannot be constructed from the provided
    /// scheme, host, port and base path.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            authentication,
            retry_policy,
        } = self;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        Ok(ApiClient {
            client,
            base_uri,
            authentication,
            retry_policy,
        })
    }

    /// Sets the HTTP scheme. Defaults to `Scheme::HTTP`.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname or IP address of the API server. Defaults to `127.0.0.1`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port. Defaults to `80`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets a base path prepended to every operation path.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::InvalidBasePath` if the path contains invalid characters
    /// (such as spaces) or cannot be parsed as a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Targets the public endpoint of a service in a region:
    /// `https://{service}.{region}.oraclecloud.com`.
    ///
    /// ```rust
    /// use ocirest_core::{ApiClient, Service};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ApiClient::builder()
    ///     .for_region(Service::Ocvp, "eu-frankfurt-1")?
    ///     .build()?;
    /// assert_eq!(client.base_uri().host(), Some("ocvps.eu-frankfurt-1.oraclecloud.com"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::InvalidArgument` when the region is empty.
    pub fn for_region(self, service: Service, region: &str) -> Result<Self, ApiClientError> {
        let region = region.trim();
        if region.is_empty() {
            return Err(ApiClientError::invalid_argument(
                "region",
                "must not be empty",
            ));
        }
        Ok(self
            .with_scheme(Scheme::HTTPS)
            .with_host(format!("{}.{region}.oraclecloud.com", service.host_prefix()))
            .with_port(443))
    }

    /// Uses a preconfigured `reqwest::Client`, for instance to set timeouts or proxies.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the authentication applied to every request.
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Sets the default retry policy. Each operation can override it.
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: None,
            authentication: None,
            retry_policy: RetryPolicy::default(),
        }
    }
}
