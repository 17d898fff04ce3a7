use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde_json::json;

use crate::AppState;
use crate::database::database_router;
use crate::errors::MockError;
use crate::identity::identity_router;
use crate::journal::{Faults, Journal, journal_layer};
use crate::ocvp::ocvp_router;

/// The application router
///
/// Service routes are journaled; `/health` and the `/mock` control routes are not.
pub fn app_router(state: &AppState) -> Router<AppState> {
    let services = Router::new()
        .nest("/20160918", identity_router().merge(database_router()))
        .nest("/20200501", ocvp_router())
        .route_layer(middleware::from_fn_with_state(
            state.journal(),
            journal_layer,
        ));

    Router::new()
        .merge(services)
        .route("/health", get(health))
        .route("/mock/requests", get(recorded_requests).delete(reset))
        .route("/mock/faults", post(inject_faults))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime();

    Json(json!({
        "status": "OK",
        "uptime": uptime,
    }))
}

async fn recorded_requests(State(journal): State<Journal>) -> impl IntoResponse {
    Json(journal.requests().await)
}

async fn reset(State(journal): State<Journal>) -> impl IntoResponse {
    journal.clear().await;
    StatusCode::NO_CONTENT
}

async fn inject_faults(
    State(journal): State<Journal>,
    Json(faults): Json<Faults>,
) -> Result<impl IntoResponse, MockError> {
    journal.inject(faults).await?;
    Ok(StatusCode::NO_CONTENT)
}
