use std::future::{Future, IntoFuture};
use std::pin::Pin;

use backon::Retryable;
use headers::HeaderMapExt;
use http::header::{ACCEPT, HeaderValue, USER_AGENT};
use http::{Method, Uri};
use reqwest::{Body, Request, Response};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::{ApiCall, BODY_MAX_LENGTH};
use crate::client::parameters::PathResolved;
use crate::client::{
    ApiClientError, Authentication, CallBody, CallHeaders, CallPath, CallQuery, CallResult,
    RetryPolicy,
};
use crate::common::ServiceErrorBody;
use crate::common::headers::{OPC_REQUEST_ID, OPC_RETRY_TOKEN};

const DEFAULT_USER_AGENT: &str = concat!("ocirest/", env!("CARGO_PKG_VERSION"));

impl ApiCall {
    pub(in crate::client) fn build(
        client: reqwest::Client,
        base_uri: Uri,
        method: Method,
        path: CallPath,
        authentication: Option<Authentication>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            base_uri,
            method,
            path,
            query: CallQuery::default(),
            headers: CallHeaders::default(),
            body: None,
            authentication,
            retry_policy,
        }
    }
}

impl ApiCall {
    /// Sends the request, applying the retry policy, and reads the response.
    ///
    /// The URL and headers are resolved before anything is sent: an unresolved path
    /// parameter or an invalid header fails without any network call.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::PathUnresolved`] and request-building errors before sending
    /// - [`ApiClientError::ReqwestError`] for transport failures
    /// - [`ApiClientError::ServiceError`] for non-success status codes
    async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let Self {
            client,
            base_uri,
            method,
            path,
            query,
            headers,
            body,
            authentication,
            retry_policy,
        } = self;

        let template = path.template().to_string();
        let url = Self::build_url(&base_uri, path, &query)?;
        let headers = Self::with_retry_token(headers, &method, &retry_policy);
        // fail fast on invalid headers, before the first attempt
        headers.to_http_headers()?;

        let client = &client;
        let method = &method;
        let url = &url;
        let headers = &headers;
        let body = body.as_ref();
        let authentication = authentication.as_ref();
        let attempt = || async move {
            let request =
                Self::build_request(method.clone(), url.clone(), headers, body, authentication)?;
            debug!(?request, "sending...");
            let response = client.execute(request).await?;
            debug!(?response, "...receiving");
            Self::check_status(response).await
        };

        let response = attempt
            .retry(retry_policy.backoff())
            .when(|err| retry_policy.should_retry(err))
            .notify(|err, delay| warn!(%err, ?delay, %url, "call failed, retrying"))
            .await?;

        CallResult::new(template, response).await
    }

    pub(super) fn build_url(
        base_uri: &Uri,
        path: CallPath,
        query: &CallQuery,
    ) -> Result<Url, ApiClientError> {
        let path_resolved = PathResolved::try_from(path)?;
        let base_uri = base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path_resolved.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            let query_string = query.to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    /// Adds a generated `opc-retry-token` to creations that may be sent more than once.
    pub(super) fn with_retry_token(
        headers: CallHeaders,
        method: &Method,
        retry_policy: &RetryPolicy,
    ) -> CallHeaders {
        if *method != Method::POST
            || !retry_policy.is_retrying()
            || headers.get(OPC_RETRY_TOKEN).is_some()
        {
            return headers;
        }
        let token = Uuid::new_v4().simple();
        debug!(%token, "generated retry token");
        headers.add_header(OPC_RETRY_TOKEN, token)
    }

    pub(super) fn build_request(
        method: Method,
        url: Url,
        headers: &CallHeaders,
        body: Option<&CallBody>,
        authentication: Option<&Authentication>,
    ) -> Result<Request, ApiClientError> {
        let mut request = Request::new(method, url);
        let req_headers = request.headers_mut();

        req_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        req_headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        for (name, value) in headers.to_http_headers()? {
            req_headers.insert(name, value);
        }

        if let Some(body) = body {
            req_headers.typed_insert(body.content_type.clone());
            *request.body_mut() = Some(Body::from(body.data.clone()));
        }

        // signing must see the final headers and body
        if let Some(auth) = authentication {
            auth.apply(&mut request)?;
        }

        Ok(request)
    }

    async fn check_status(response: Response) -> Result<Response, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let opc_request_id = response
            .headers()
            .get(OPC_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = response
            .text()
            .await
            .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));

        let (code, message) = match serde_json::from_str::<ServiceErrorBody>(&body) {
            Ok(ServiceErrorBody { code, message }) => {
                (code, message.unwrap_or_else(|| truncate(&body)))
            }
            Err(_) => (None, truncate(&body)),
        };

        Err(ApiClientError::ServiceError {
            status_code,
            code,
            message,
            opc_request_id,
        })
    }
}

pub(super) fn truncate(text: &str) -> String {
    if text.len() > BODY_MAX_LENGTH {
        let head = text.chars().take(BODY_MAX_LENGTH).collect::<String>();
        format!("{head}... (truncated)")
    } else {
        text.to_string()
    }
}

/// Implement `IntoFuture` for `ApiCall` to enable direct `.await` syntax.
impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
