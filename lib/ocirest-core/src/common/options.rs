use crate::client::{CallHeaders, RetryPolicy};

use super::headers::{IF_MATCH, OPC_RETRY_TOKEN};

/// Optimistic concurrency control for updates and deletes.
///
/// When `if_match` is set, the operation applies only if the resource etag still matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IfMatchOptions {
    /// The etag of the resource, from a previous get, list or create.
    pub if_match: Option<String>,
}

impl IfMatchOptions {
    /// Applies the operation only if the resource still has this etag.
    pub fn new(etag: impl Into<String>) -> Self {
        Self {
            if_match: Some(etag.into()),
        }
    }

    pub(crate) fn to_headers(&self) -> CallHeaders {
        CallHeaders::new().add_optional_header(IF_MATCH, self.if_match.as_deref())
    }
}

/// Idempotency for creations.
///
/// A request repeated with the same `retry_token` is not applied twice by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryTokenOptions {
    /// A caller-chosen unique token; the service keeps it for 24 hours.
    pub retry_token: Option<String>,
}

impl RetryTokenOptions {
    /// Uses this token for the request.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            retry_token: Some(token.into()),
        }
    }

    pub(crate) fn to_headers(&self) -> CallHeaders {
        CallHeaders::new().add_optional_header(OPC_RETRY_TOKEN, self.retry_token.as_deref())
    }
}

/// Client-side settings of a request, never sent to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Overrides the retry policy of the client for this request.
    pub retry_policy: Option<RetryPolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_match_header_only_when_present() {
        assert!(IfMatchOptions::default().to_headers().is_empty());

        let headers = IfMatchOptions::new("etag-42").to_headers();
        assert_eq!(headers.get("if-match"), Some("etag-42"));
    }

    #[test]
    fn test_retry_token_header_only_when_present() {
        assert!(RetryTokenOptions::default().to_headers().is_empty());

        let headers = RetryTokenOptions::new("token-1").to_headers();
        assert_eq!(headers.get("opc-retry-token"), Some("token-1"));
    }
}
