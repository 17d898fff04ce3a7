use std::fmt::Debug;

use super::auth::AuthenticationError;

/// Coarse classification of an [`ApiClientError`].
///
/// Callers use it to tell apart "the request was never sent", "the network failed",
/// "the service rejected the request" and "the response could not be understood".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    /// A required argument was missing or invalid; no request was sent.
    InvalidArgument,
    /// Connection, DNS or timeout failure reported by the transport.
    Transport,
    /// The service answered with a non-success status code.
    Service,
    /// A nominally successful response body did not match the expected shape.
    Deserialization,
    /// The request could not be assembled (URL, headers, body, authentication).
    Configuration,
}

/// Errors that can occur when using the [`ApiClient`](super::ApiClient).
///
/// Every client method surfaces either a typed result or exactly one of these errors.
/// Use [`ApiClientError::kind`] to classify it.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error for request bodies.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Authentication data could not be turned into request headers.
    AuthenticationError(AuthenticationError),

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// A required parameter was not supplied.
    ///
    /// Raised by request descriptors before any network call is attempted.
    #[display("Invalid argument '{name}': {reason}")]
    #[from(skip)]
    InvalidArgument {
        /// The wire name of the parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// The service answered with a non-success status code.
    #[display(
        "Service error {status_code} ({}): {message}",
        code.as_deref().unwrap_or("unknown")
    )]
    #[from(skip)]
    ServiceError {
        /// The HTTP status code.
        status_code: u16,
        /// The provider error code, when the body carried one.
        code: Option<String>,
        /// The provider error message, or the raw response body.
        message: String,
        /// The `opc-request-id` echoed by the service.
        opc_request_id: Option<String>,
    },

    /// JSON response deserialization failure.
    ///
    /// Occurs when the response body cannot be parsed as the expected JSON structure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// The JSON path where the error occurred.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Data serialization failed.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },
}

impl ApiClientError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::PathUnresolved { .. } => ErrorKind::InvalidArgument,
            Self::ReqwestError(_) => ErrorKind::Transport,
            Self::ServiceError { .. } => ErrorKind::Service,
            Self::JsonError { .. } => ErrorKind::Deserialization,
            Self::UrlError(_)
            | Self::HttpError(_)
            | Self::InvalidHeaderName(_)
            | Self::InvalidHeaderValue(_)
            | Self::JsonValueError(_)
            | Self::QuerySerializationError(_)
            | Self::AuthenticationError(_)
            | Self::InvalidBasePath { .. }
            | Self::SerializationError { .. } => ErrorKind::Configuration,
        }
    }

    /// Returns the HTTP status code for service errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ServiceError { status_code, .. } => Some(*status_code),
            Self::ReqwestError(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
