use headers::ContentType;
use http::StatusCode;
use reqwest::Response;

use super::ApiClientError;

/// Response body, classified by content type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Output {
    /// No body (or `204 No Content`).
    Empty,
    /// `application/json` body.
    Json(String),
    /// `text/*` body.
    Text(String),
    /// `application/octet-stream` body.
    Bytes(Vec<u8>),
    /// Any other content type, read as text.
    Other {
        /// The body as text.
        body: String,
    },
}

impl Output {
    pub(in crate::client) async fn read(
        response: Response,
        content_type: Option<&ContentType>,
        status: StatusCode,
    ) -> Result<Self, ApiClientError> {
        if status == StatusCode::NO_CONTENT {
            return Ok(Self::Empty);
        }
        let Some(content_type) = content_type else {
            let body = response.text().await?;
            return Ok(if body.is_empty() {
                Self::Empty
            } else {
                Self::Other { body }
            });
        };

        let essence = content_type.to_string();
        let output = if essence.starts_with("application/json") {
            Self::Json(response.text().await?)
        } else if *content_type == ContentType::octet_stream() {
            Self::Bytes(response.bytes().await?.to_vec())
        } else if essence.starts_with("text/") {
            Self::Text(response.text().await?)
        } else {
            Self::Other {
                body: response.text().await?,
            }
        };
        Ok(output)
    }

    /// Returns the body as text, when it is not binary.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(body) | Self::Text(body) | Self::Other { body } => Some(body),
            Self::Empty | Self::Bytes(_) => None,
        }
    }

    /// Returns true when there is no body.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Json(body) | Self::Text(body) | Self::Other { body } => body.is_empty(),
            Self::Bytes(bytes) => bytes.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_empty() {
        let output = Output::Empty;

        assert!(output.is_empty());
        assert_eq!(output.as_text(), None);
    }

    #[test]
    fn test_output_json_as_text() {
        let output = Output::Json(r#"{"version": "7.0 update 3"}"#.to_string());

        assert!(!output.is_empty());
        assert_eq!(output.as_text(), Some(r#"{"version": "7.0 update 3"}"#));
    }

    #[test]
    fn test_output_bytes_has_no_text() {
        let output = Output::Bytes(vec![1, 2, 3, 4]);

        assert_eq!(output.as_text(), None);
    }

    #[test]
    fn test_output_other_as_text() {
        let output = Output::Other {
            body: "some other content".to_string(),
        };

        assert_eq!(output.as_text(), Some("some other content"));
    }
}
