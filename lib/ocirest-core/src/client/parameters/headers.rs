use std::fmt::Display;

use http::header::{HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::error::ApiClientError;

/// Represents HTTP headers for an API call.
///
/// Header names are kept as given and validated when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing a previous value with the same name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ocirest_core::CallHeaders;
    ///
    /// let headers = CallHeaders::new()
    ///     .add_header("if-match", "etag-1")
    ///     .add_header("opc-request-id", "abc-123-def");
    /// assert_eq!(headers.len(), 2);
    /// ```
    pub fn add_header(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.headers.insert(name.into(), value.to_string());
        self
    }

    /// Adds a header only when the value is present.
    pub fn add_optional_header<T: Display>(
        self,
        name: impl Into<String>,
        value: Option<T>,
    ) -> Self {
        match value {
            Some(value) => self.add_header(name, value),
            None => self,
        }
    }

    /// Merges another `CallHeaders` instance into this one.
    ///
    /// Headers from the other instance override headers with the same name.
    pub fn merge(mut self, other: Self) -> Self {
        self.headers.extend(other.headers);
        self
    }

    /// Checks if the headers collection is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns the value of a header, the lookup is case-insensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Converts headers to HTTP header format for reqwest.
    pub(in crate::client) fn to_http_headers(
        &self,
    ) -> Result<Vec<(HeaderName, HeaderValue)>, ApiClientError> {
        let mut result = Vec::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(value)?;
            result.push((name, value));
        }
        Ok(result)
    }
}
