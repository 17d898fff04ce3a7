use std::fmt;
use std::sync::Arc;

use http::HeaderValue;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderName};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors that can occur during authentication processing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// API key header name is invalid.
    #[display("Invalid API key header name '{header_name}': {message}")]
    InvalidHeaderName {
        /// The invalid header name that was provided.
        header_name: String,
        /// Description of why the header name is invalid.
        message: String,
    },

    /// API key value contains invalid characters for HTTP headers.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// A [`RequestSigner`] refused to sign the request.
    #[display("Request signing failed: {message}")]
    SigningFailed {
        /// Description of the signing failure.
        message: String,
    },
}

/// Secure wrapper for sensitive string data that automatically zeroes memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the secure string equals the given string slice.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }

    fn mask_sensitive(value: &str) -> String {
        if value.len() <= 8 {
            "***".to_string()
        } else {
            let head = value.get(..4).unwrap_or_default();
            let tail = value.get(value.len() - 4..).unwrap_or_default();
            format!("{head}...{tail}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Signs an outgoing request just before it is sent.
///
/// Providers that authenticate with request signatures (key id, signed headers, digest)
/// plug their implementation in here. The signer is called once per attempt, after every
/// other header and the body have been set.
pub trait RequestSigner: Send + Sync + 'static {
    /// Adds the authentication headers to the request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::SigningFailed`] when the request cannot be signed.
    fn sign(&self, request: &mut Request) -> Result<(), AuthenticationError>;
}

/// Authentication configuration for API requests.
///
/// Authentication is configured once on the [`ApiClientBuilder`](super::ApiClientBuilder)
/// and applied by the executor to every request.
///
/// # Examples
///
/// ```rust
/// use ocirest_core::Authentication;
///
/// // Bearer token authentication
/// let auth = Authentication::Bearer("my-api-token".into());
///
/// // API key in header
/// let auth = Authentication::ApiKey {
///     header_name: "X-API-Key".to_string(),
///     key: "secret-key".into(),
/// };
/// ```
#[derive(Clone)]
pub enum Authentication {
    /// Adds `Authorization: Bearer <token>` header.
    Bearer(SecureString),

    /// Adds `<header_name>: <key>` header.
    ApiKey {
        /// The header name for the API key.
        header_name: String,
        /// The API key value.
        key: SecureString,
    },

    /// Delegates to a request signer.
    Signer(Arc<dyn RequestSigner>),
}

impl Authentication {
    /// Creates a signer-based authentication.
    pub fn signer(signer: impl RequestSigner) -> Self {
        Self::Signer(Arc::new(signer))
    }

    /// Applies the authentication to the request.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` if the authentication data contains invalid characters
    /// or the signer fails.
    pub fn apply(&self, request: &mut Request) -> Result<(), AuthenticationError> {
        match self {
            Self::Bearer(token) => {
                let header_value = format!("Bearer {}", token.as_str());
                let mut value = HeaderValue::from_str(&header_value).map_err(|err| {
                    AuthenticationError::InvalidBearerToken {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Self::ApiKey { header_name, key } => {
                let header = HeaderName::from_bytes(header_name.as_bytes()).map_err(|err| {
                    AuthenticationError::InvalidHeaderName {
                        header_name: header_name.clone(),
                        message: err.to_string(),
                    }
                })?;
                let mut value = HeaderValue::from_str(key.as_str()).map_err(|err| {
                    AuthenticationError::InvalidApiKey {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                request.headers_mut().insert(header, value);
            }
            Self::Signer(signer) => {
                signer.sign(request)?;
                if let Some(value) = request.headers_mut().get_mut(AUTHORIZATION) {
                    value.set_sensitive(true);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::ApiKey { header_name, .. } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("key", &"[REDACTED]")
                .finish(),
            Self::Signer(_) => f.debug_tuple("Signer").field(&"..").finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => write!(f, "Bearer {token}"),
            Self::ApiKey { header_name, key } => write!(f, "ApiKey ({header_name}: {key})"),
            Self::Signer(_) => write!(f, "Signer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_request() -> Request {
        Request::new(
            http::Method::GET,
            "http://localhost/".parse().expect("valid url"),
        )
    }

    struct StaticSigner;

    impl RequestSigner for StaticSigner {
        fn sign(&self, request: &mut Request) -> Result<(), AuthenticationError> {
            let key_id = request
                .url()
                .host_str()
                .map(|host| format!("Signature keyId=\"{host}\""))
                .ok_or_else(|| AuthenticationError::SigningFailed {
                    message: "no host".to_string(),
                })?;
            request.headers_mut().insert(
                AUTHORIZATION,
                HeaderValue::from_str(&key_id).map_err(|err| AuthenticationError::SigningFailed {
                    message: err.to_string(),
                })?,
            );
            Ok(())
        }
    }

    #[test]
    fn test_bearer_authentication() {
        let auth = Authentication::Bearer("my-secret-token".into());
        let mut request = empty_request();

        auth.apply(&mut request).expect("valid token");

        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("header set"),
            "Bearer my-secret-token"
        );
    }

    #[test]
    fn test_api_key_authentication() {
        let auth = Authentication::ApiKey {
            header_name: "X-API-Key".to_string(),
            key: "secret-key-123".into(),
        };
        let mut request = empty_request();

        auth.apply(&mut request).expect("valid key");

        assert_eq!(
            request.headers().get("x-api-key").expect("header set"),
            "secret-key-123"
        );
    }

    #[test]
    fn test_signer_authentication() {
        let auth = Authentication::signer(StaticSigner);
        let mut request = empty_request();

        auth.apply(&mut request).expect("signed");

        assert_eq!(
            request.headers().get(AUTHORIZATION).expect("header set"),
            "Signature keyId=\"localhost\""
        );
    }

    #[test]
    fn test_request_debug_hides_credentials() {
        let cases = [
            (
                Authentication::Bearer("super-secret-token-xyz".into()),
                "super-secret-token-xyz",
            ),
            (
                Authentication::ApiKey {
                    header_name: "X-API-Key".to_string(),
                    key: "secret-key-123".into(),
                },
                "secret-key-123",
            ),
            (Authentication::signer(StaticSigner), "keyId"),
        ];

        for (auth, secret) in cases {
            let mut request = empty_request();
            auth.apply(&mut request).expect("applied");

            let debug = format!("{request:?}");
            assert!(!debug.contains(secret), "{debug}");
            assert!(debug.contains("Sensitive"), "{debug}");
        }
    }

    #[test]
    fn test_display_masks_secrets() {
        let auth = Authentication::Bearer("very-secret-token-12345".into());
        assert_eq!(auth.to_string(), "Bearer very...2345");

        let auth = Authentication::ApiKey {
            header_name: "X-API-Key".to_string(),
            key: "secret-key-12345".into(),
        };
        assert_eq!(auth.to_string(), "ApiKey (X-API-Key: secr...2345)");
    }

    #[test]
    fn test_secure_string_mask_short_tokens() {
        assert_eq!(SecureString::mask_sensitive("short"), "***");
        assert_eq!(SecureString::mask_sensitive("12345678"), "***");
        assert_eq!(SecureString::mask_sensitive("123456789"), "1234...6789");
    }

    #[test]
    fn test_authentication_errors() {
        let mut request = empty_request();

        let auth = Authentication::Bearer("\0invalid".into());
        let result = auth.apply(&mut request);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidBearerToken { .. })
        ));

        let auth = Authentication::ApiKey {
            header_name: "Invalid Header".to_string(),
            key: "key".into(),
        };
        let result = auth.apply(&mut request);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidHeaderName { .. })
        ));

        let auth = Authentication::ApiKey {
            header_name: "X-API-Key".to_string(),
            key: "\0invalid".into(),
        };
        let result = auth.apply(&mut request);
        assert!(matches!(result, Err(AuthenticationError::InvalidApiKey { .. })));
    }

    #[test]
    fn test_secure_string_debug() {
        let secure = SecureString::new("secret-password".to_string());
        let debug_str = format!("{secure:?}");
        assert_eq!(debug_str, "SecureString { value: \"[REDACTED]\" }");
        assert!(!debug_str.contains("secret-password"));
    }
}
