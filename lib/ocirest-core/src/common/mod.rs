//! Building blocks shared by the service modules.
//!
//! - [`OperationRequest`] / [`OperationResponse`] - the contract of one typed operation
//! - [`ListResponse`] - one page of a listing operation
//! - [`IfMatchOptions`], [`RetryTokenOptions`], [`RequestMetadata`] - optional settings
//! - [`headers`] - wire header names

use serde::Deserialize;

pub mod headers;

mod operation;
pub(crate) use self::operation::required;
pub use self::operation::{ListResponse, OperationRequest, OperationResponse};

mod options;
pub use self::options::{IfMatchOptions, RequestMetadata, RetryTokenOptions};

mod service;
pub use self::service::Service;

mod string_enum;
pub(crate) use self::string_enum::string_enum;

/// The error body returned by the services on failure.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceErrorBody {
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}
