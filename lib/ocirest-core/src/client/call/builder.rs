use std::fmt::Display;

use serde::Serialize;

use super::ApiCall;
use crate::client::{ApiClientError, CallBody, CallHeaders, CallQuery, RetryPolicy};

impl ApiCall {
    // =============================================================================
    // Request Configuration Methods
    // =============================================================================

    /// Replaces the query parameters.
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = query;
        self
    }

    /// Adds headers to the API call, merging with any existing headers.
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = self.headers.merge(headers);
        self
    }

    /// Convenience method to add a single header.
    ///
    /// If a header with the same name already exists, the new value overrides it.
    ///
    /// ```rust
    /// # use ocirest_core::ApiClient;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ApiClient::builder().build()?;
    /// let call = client
    ///     .delete("/20160918/users/u1/apiKeys/f1")
    ///     .with_header("if-match", "etag-1");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_header(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.headers = self.headers.add_header(name, value);
        self
    }

    /// Adds a header only when the value is present.
    pub fn with_optional_header<T: Display>(
        mut self,
        name: impl Into<String>,
        value: Option<T>,
    ) -> Self {
        self.headers = self.headers.add_optional_header(name, value);
        self
    }

    // =============================================================================
    // Request Body Methods
    // =============================================================================

    /// Sets a JSON request body.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized as JSON.
    pub fn json<T>(self, value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let body = CallBody::json(value)?;
        Ok(self.with_body(body))
    }

    /// Sets a prepared request body.
    pub fn with_body(mut self, body: CallBody) -> Self {
        self.body = Some(body);
        self
    }

    // =============================================================================
    // Executor Configuration
    // =============================================================================

    /// Overrides the retry policy of the client for this call.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Overrides the retry policy when one is given, keeps the client default otherwise.
    pub fn with_retry_policy_option(self, policy: Option<&RetryPolicy>) -> Self {
        match policy {
            Some(policy) => self.with_retry_policy(policy.clone()),
            None => self,
        }
    }
}
