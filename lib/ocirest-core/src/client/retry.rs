use std::time::Duration;

use backon::ExponentialBuilder;

use super::ApiClientError;

const DEFAULT_RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// Retry policy applied by the [`ApiClient`](super::ApiClient) executor.
///
/// The policy is opaque to the client operations: it is attached to the client as a default
/// and can be overridden per call through
/// [`RequestMetadata`](crate::common::RequestMetadata).
///
/// The default policy makes a single attempt.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ocirest_core::RetryPolicy;
///
/// let policy = RetryPolicy::exponential(5)
///     .with_min_delay(Duration::from_millis(100))
///     .with_max_delay(Duration::from_secs(10))
///     .with_jitter(true);
/// assert_eq!(policy.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    min_delay: Duration,
    max_delay: Duration,
    jitter: bool,
    retryable_status_codes: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::no_retry()
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: false,
            retryable_status_codes: DEFAULT_RETRYABLE_STATUS_CODES.to_vec(),
        }
    }

    /// An exponential backoff policy with at most `max_attempts` attempts (at least one).
    pub fn exponential(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::no_retry()
        }
    }

    /// Sets the delay before the first retry.
    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    /// Sets the maximum delay between two attempts.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enables or disables jitter on the delays.
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Replaces the status codes that trigger a retry.
    pub fn with_retryable_status_codes(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.retryable_status_codes = codes.into_iter().collect();
        self
    }

    /// Returns the maximum number of attempts, including the first one.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns true when the policy may send a request more than once.
    pub fn is_retrying(&self) -> bool {
        self.max_attempts > 1
    }

    /// Tells whether the error should be retried.
    ///
    /// Transport failures and service errors with a retryable status code are retried,
    /// everything else is returned to the caller immediately.
    pub fn should_retry(&self, error: &ApiClientError) -> bool {
        match error {
            ApiClientError::ReqwestError(err) => {
                err.is_connect() || err.is_timeout() || err.is_request()
            }
            ApiClientError::ServiceError { status_code, .. } => {
                self.retryable_status_codes.contains(status_code)
            }
            _ => false,
        }
    }

    pub(in crate::client) fn backoff(&self) -> ExponentialBuilder {
        let builder = ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_attempts.saturating_sub(1));

        if self.jitter {
            builder.with_jitter()
        } else {
            builder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(status_code: u16) -> ApiClientError {
        ApiClientError::ServiceError {
            status_code,
            code: None,
            message: String::new(),
            opc_request_id: None,
        }
    }

    #[test]
    fn test_default_policy_does_not_retry() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.is_retrying());
    }

    #[test]
    fn test_exponential_has_at_least_one_attempt() {
        assert_eq!(RetryPolicy::exponential(0).max_attempts(), 1);
        assert!(RetryPolicy::exponential(3).is_retrying());
    }

    #[test]
    fn test_should_retry_retryable_status() {
        let policy = RetryPolicy::exponential(3);

        assert!(policy.should_retry(&service_error(429)));
        assert!(policy.should_retry(&service_error(503)));
        assert!(!policy.should_retry(&service_error(400)));
        assert!(!policy.should_retry(&service_error(404)));
        assert!(!policy.should_retry(&service_error(412)));
    }

    #[test]
    fn test_custom_retryable_status_codes() {
        let policy = RetryPolicy::exponential(3).with_retryable_status_codes([409]);

        assert!(policy.should_retry(&service_error(409)));
        assert!(!policy.should_retry(&service_error(503)));
    }

    #[test]
    fn test_local_errors_are_never_retried() {
        let policy = RetryPolicy::exponential(3);

        assert!(!policy.should_retry(&ApiClientError::invalid_argument("userId", "empty")));
    }

    #[tokio::test]
    async fn test_connection_refused_is_retried() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("free port")
            .port();
        let error = reqwest::Client::new()
            .get(format!("http://127.0.0.1:{port}/"))
            .send()
            .await
            .map(drop)
            .expect_err("nothing listens");
        let error = ApiClientError::from(error);

        assert_eq!(error.kind(), crate::client::ErrorKind::Transport);
        assert!(RetryPolicy::exponential(2).should_retry(&error));
    }
}
