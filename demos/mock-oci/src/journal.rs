use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use axum::extract::{OriginalUri, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::MockError;

pub(crate) const OPC_REQUEST_ID: &str = "opc-request-id";

/// A request received by the mock services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    /// Method, upper case
    pub method: String,
    /// Full path, percent-encoded as received
    pub path: String,
    /// Raw query string
    pub query: Option<String>,
    /// Header names are lowercase
    pub headers: BTreeMap<String, String>,
}

/// Answers to give instead of handling the next requests.
///
/// The statuses are replayed first, then the malformed bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Faults {
    /// Error statuses, answered with a provider error body
    #[serde(default)]
    pub statuses: Vec<u16>,
    /// Number of `200 OK` answers whose JSON body has the wrong shape
    #[serde(default)]
    pub malformed: usize,
}

#[derive(Debug, Clone, Copy)]
enum Fault {
    Status(StatusCode),
    Malformed,
}

impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        match self {
            Self::Status(status) => MockError::Injected { status }.into_response(),
            Self::Malformed => Json(json!({ "items": "malformed" })).into_response(),
        }
    }
}

/// Records the requests and replays injected faults.
#[derive(Clone, Default)]
pub(crate) struct Journal {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    faults: Arc<RwLock<VecDeque<Fault>>>,
}

impl Journal {
    pub(crate) async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub(crate) async fn clear(&self) {
        self.requests.write().await.clear();
        self.faults.write().await.clear();
    }

    pub(crate) async fn inject(&self, faults: Faults) -> Result<(), MockError> {
        let Faults { statuses, malformed } = faults;
        let mut injected = statuses
            .into_iter()
            .map(|code| {
                StatusCode::from_u16(code)
                    .map(Fault::Status)
                    .map_err(|err| MockError::InvalidParameter {
                        name: "statuses",
                        reason: err.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        injected.extend(std::iter::repeat_n(Fault::Malformed, malformed));
        self.faults.write().await.extend(injected);
        Ok(())
    }

    fn record(&self, request: &Request) -> impl Future<Output = ()> + Send + '_ {
        let headers = request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // nested routers see the uri without their prefix
        let uri = request
            .extensions()
            .get::<OriginalUri>()
            .map_or_else(|| request.uri(), |original| &original.0);
        let recorded = RecordedRequest {
            method: request.method().to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(ToString::to_string),
            headers,
        };
        async move {
            debug!(?recorded, "recording request");
            self.requests.write().await.push(recorded);
        }
    }

    async fn next_fault(&self) -> Option<Fault> {
        self.faults.write().await.pop_front()
    }
}

/// Records every service request, replays injected faults and echoes `opc-request-id`.
pub(crate) async fn journal_layer(
    State(journal): State<Journal>,
    request: Request,
    next: Next,
) -> Response {
    let opc_request_id = request
        .headers()
        .get(OPC_REQUEST_ID)
        .cloned()
        .or_else(|| HeaderValue::from_str(&Uuid::new_v4().simple().to_string()).ok());

    journal.record(&request).await;
    let mut response = match journal.next_fault().await {
        Some(fault) => {
            debug!(?fault, "replaying fault");
            fault.into_response()
        }
        None => next.run(request).await,
    };

    if let Some(value) = opc_request_id {
        response.headers_mut().insert(OPC_REQUEST_ID, value);
    }
    response
}
