use headers::{ContentType, Header};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ApiClientError;
use super::output::Output;
use crate::common::headers::{ETAG, OPC_NEXT_PAGE, OPC_REQUEST_ID};

/// The transport-level part of a completed call: status code and headers.
///
/// Every typed response wrapper keeps one, so callers can always reach headers that the
/// typed wrapper does not surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
}

impl RawResponse {
    /// Creates a raw response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    /// Returns the HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns all the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the value of a header when it is present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// Returns the `opc-request-id` header.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header(OPC_REQUEST_ID)
    }

    /// Returns the `opc-next-page` pagination cursor.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header(OPC_NEXT_PAGE)
    }

    /// Returns the `etag` header.
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG)
    }
}

/// The result of a successful API call.
///
/// The body is read eagerly; use [`as_json`](Self::as_json) to deserialize it or
/// [`as_empty`](Self::as_empty) for operations without a body.
#[derive(Debug, Clone)]
pub struct CallResult {
    path: String,
    raw: RawResponse,
    content_type: Option<ContentType>,
    output: Output,
}

impl CallResult {
    /// An unparseable content type is logged and the body is kept as [`Output::Other`].
    fn extract_content_type(response: &Response) -> Option<ContentType> {
        let mut values = response.headers().get_all(CONTENT_TYPE).iter().peekable();
        values.peek()?;
        match ContentType::decode(&mut values) {
            Ok(content_type) => Some(content_type),
            Err(error) => {
                warn!(?error, "ignoring malformed content type");
                None
            }
        }
    }

    pub(in crate::client) async fn new(
        path: String,
        response: Response,
    ) -> Result<Self, ApiClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = Self::extract_content_type(&response);
        let output = Output::read(response, content_type.as_ref(), status).await?;

        Ok(Self {
            path,
            raw: RawResponse::new(status, headers),
            content_type,
            output,
        })
    }

    /// Returns the transport-level response.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Consumes the result, keeping only the transport-level response.
    pub fn into_raw(self) -> RawResponse {
        self.raw
    }

    /// Returns the content type of the response, if present.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Returns the response body.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] with the path of the failing field when the body
    /// does not match `T`. An empty or non-text body is reported the same way.
    pub fn as_json<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.output.as_text().unwrap_or_default();
        let deserializer = &mut serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            ApiClientError::JsonError {
                path: format!("{} {path}", self.path),
                error: err.into_inner(),
                body: body.to_string(),
            }
        })
    }

    /// Checks that the call returned no meaningful body and keeps the raw response.
    ///
    /// A non-empty body is ignored, some services answer deletes with `{}`.
    pub fn as_empty(self) -> RawResponse {
        self.raw
    }
}
