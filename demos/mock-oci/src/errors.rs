use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, derive_more::Error, derive_more::From, derive_more::Display)]
pub(crate) enum MockError {
    SeedError(serde_json::Error),

    #[display("Missing or empty parameter '{name}'")]
    #[from(skip)]
    MissingParameter { name: &'static str },

    #[display("Invalid value for parameter '{name}': {reason}")]
    #[from(skip)]
    InvalidParameter { name: &'static str, reason: String },

    #[display("{resource} not found or not authorized")]
    #[from(skip)]
    NotFound { resource: String },

    #[display("The if-match value does not match the current etag")]
    #[from(skip)]
    NoEtagMatch,

    #[display("User {user_id} already has {limit} API keys")]
    #[from(skip)]
    ApiKeyLimitExceeded { user_id: String, limit: usize },

    #[display("Injected fault")]
    #[from(skip)]
    Injected { status: StatusCode },
}

impl MockError {
    fn status(&self) -> StatusCode {
        match self {
            Self::SeedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NoEtagMatch => StatusCode::PRECONDITION_FAILED,
            Self::ApiKeyLimitExceeded { .. } => StatusCode::CONFLICT,
            Self::Injected { status } => *status,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::SeedError(_) => "InternalServerError",
            Self::MissingParameter { .. } => "MissingParameter",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::NotFound { .. } => "NotAuthorizedOrNotFound",
            Self::NoEtagMatch => "NoEtagMatch",
            Self::ApiKeyLimitExceeded { .. } => "ApiKeyLimitExceeded",
            Self::Injected { status } if *status == StatusCode::TOO_MANY_REQUESTS => {
                "TooManyRequests"
            }
            Self::Injected { .. } => "InjectedFault",
        }
    }
}

/// The provider error body, returned for every error.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for MockError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
