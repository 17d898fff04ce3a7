use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// Represents the body of an HTTP request with its content type.
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    #[debug(ignore)]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Creates a JSON body from a serializable type.
    ///
    /// Only the fields the type serializes end up in the payload, so request structures
    /// keep their path, query and header parameters out of their `Serialize` impl.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ocirest_core::CallBody;
    /// # use serde::Serialize;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// #[derive(Serialize)]
    /// struct CreateApiKeyDetails {
    ///     key: String,
    /// }
    ///
    /// let body = CallBody::json(&CreateApiKeyDetails { key: "-----BEGIN PUBLIC KEY-----".to_string() })?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized as JSON.
    pub fn json<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let content_type = ContentType::json();
        let data = serde_json::to_vec(value)?;

        Ok(Self { content_type, data })
    }

    /// Returns the content type of the body.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// Returns the serialized payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Details {
        key: String,
        #[serde(skip)]
        user_id: String,
    }

    #[test]
    fn test_json_body_excludes_skipped_fields() {
        let details = Details {
            key: "ssh-rsa AAAA".to_string(),
            user_id: "u1".to_string(),
        };

        let body = CallBody::json(&details).expect("serializable");

        assert_eq!(body.content_type(), &ContentType::json());
        insta::assert_snapshot!(String::from_utf8_lossy(body.data()), @r#"{"key":"ssh-rsa AAAA"}"#);
    }

    #[test]
    fn test_debug_hides_payload() {
        let body = CallBody::json(&serde_json::json!({"key": "secret"})).expect("serializable");

        let debug = format!("{body:?}");

        assert!(!debug.contains("secret"));
        assert_eq!(body.data().len(), 16);
    }
}
