use crate::client::{ApiCall, ApiClient, ApiClientError, CallResult};

/// An operation request: the typed intent of one call.
///
/// Implementations validate their required parameters and render themselves into an
/// [`ApiCall`]; [`ApiClient::execute`] sends it and decodes the response with
/// [`OperationResponse::from_result`].
pub trait OperationRequest {
    /// The typed response of the operation.
    type Response: OperationResponse;

    /// Builds the call for this request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidArgument`] when a required parameter is missing,
    /// or a configuration error when the body cannot be serialized.
    fn to_call(&self, client: &ApiClient) -> Result<ApiCall, ApiClientError>;
}

/// A typed operation response decoded from a successful call.
pub trait OperationResponse: Sized {
    /// Decodes the call result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] when the body does not match the expected type.
    fn from_result(result: CallResult) -> Result<Self, ApiClientError>;
}

/// One page of a listing operation.
///
/// Each call returns exactly one page. To continue, issue the same request again with
/// `page` set to [`next_page`](Self::next_page); no cursor means the listing is complete.
pub trait ListResponse {
    /// The listed resource.
    type Item;

    /// The items of this page, in server order.
    fn items(&self) -> &[Self::Item];

    /// The cursor to the next page, if any.
    fn next_page(&self) -> Option<&str>;
}

/// Checks a required string parameter is not empty.
pub(crate) fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiClientError> {
    if value.trim().is_empty() {
        return Err(ApiClientError::invalid_argument(name, "must not be empty"));
    }
    Ok(value)
}
