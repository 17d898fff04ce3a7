use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use crate::errors::MockError;

const MAX_KEYS_PER_USER: usize = 3;
const TENANCY_ID: &str = "ocid1.tenancy.oc1..mock";

/// An API signing key, as returned by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub key_id: String,
    pub key_value: String,
    pub fingerprint: String,
    pub user_id: String,
    pub time_created: DateTime<Utc>,
    pub lifecycle_state: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateApiKeyDetails {
    pub key: String,
}

#[derive(Debug, Clone)]
struct StoredKey {
    api_key: ApiKey,
    etag: String,
}

#[derive(Clone, Default)]
pub(crate) struct ApiKeyRepository {
    keys: Arc<RwLock<HashMap<String, Vec<StoredKey>>>>,
    retry_tokens: Arc<RwLock<HashMap<String, StoredKey>>>,
}

impl ApiKeyRepository {
    async fn list(&self, user_id: &str) -> Vec<ApiKey> {
        let keys = self.keys.read().await;
        keys.get(user_id)
            .map(|keys| keys.iter().map(|it| it.api_key.clone()).collect())
            .unwrap_or_default()
    }

    async fn upload(
        &self,
        user_id: &str,
        key: String,
        retry_token: Option<String>,
    ) -> Result<StoredKey, MockError> {
        let mut retry_tokens = self.retry_tokens.write().await;
        if let Some(stored) = retry_token.as_ref().and_then(|token| retry_tokens.get(token)) {
            info!(user_id, "replaying upload for a known retry token");
            return Ok(stored.clone());
        }

        let mut keys = self.keys.write().await;
        let user_keys = keys.entry(user_id.to_string()).or_default();
        if user_keys.len() >= MAX_KEYS_PER_USER {
            return Err(MockError::ApiKeyLimitExceeded {
                user_id: user_id.to_string(),
                limit: MAX_KEYS_PER_USER,
            });
        }

        let fingerprint = fingerprint();
        let stored = StoredKey {
            api_key: ApiKey {
                key_id: format!("{TENANCY_ID}/{user_id}/{fingerprint}"),
                key_value: key,
                fingerprint,
                user_id: user_id.to_string(),
                time_created: Utc::now(),
                lifecycle_state: "ACTIVE".to_string(),
            },
            etag: Uuid::new_v4().simple().to_string(),
        };
        user_keys.push(stored.clone());
        if let Some(token) = retry_token {
            retry_tokens.insert(token, stored.clone());
        }

        Ok(stored)
    }

    async fn delete(
        &self,
        user_id: &str,
        fingerprint: &str,
        if_match: Option<&str>,
    ) -> Result<(), MockError> {
        let mut keys = self.keys.write().await;
        let not_found = || MockError::NotFound {
            resource: format!("API key {fingerprint} of user {user_id}"),
        };
        let user_keys = keys.get_mut(user_id).ok_or_else(not_found)?;
        let position = user_keys
            .iter()
            .position(|it| it.api_key.fingerprint == fingerprint)
            .ok_or_else(not_found)?;

        let matches = user_keys
            .get(position)
            .is_some_and(|it| if_match.is_none_or(|etag| etag == it.etag));
        if !matches {
            return Err(MockError::NoEtagMatch);
        }
        user_keys.remove(position);

        Ok(())
    }
}

/// A colon-separated hex fingerprint, like the MD5 fingerprint of a real key.
fn fingerprint() -> String {
    Uuid::new_v4()
        .into_bytes()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

pub(crate) fn identity_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{user_id}/apiKeys/",
            get(list_api_keys).post(upload_api_key),
        )
        .route("/users/{user_id}/apiKeys/{fingerprint}", delete(delete_api_key))
}

async fn list_api_keys(
    State(repository): State<ApiKeyRepository>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    Json(repository.list(&user_id).await)
}

async fn upload_api_key(
    State(repository): State<ApiKeyRepository>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(details): Json<CreateApiKeyDetails>,
) -> Result<impl IntoResponse, MockError> {
    if details.key.trim().is_empty() {
        return Err(MockError::MissingParameter { name: "key" });
    }
    let retry_token = header_value(&headers, "opc-retry-token").map(ToString::to_string);

    let stored = repository
        .upload(&user_id, details.key, retry_token)
        .await?;

    let etag = HeaderValue::from_str(&stored.etag).map_err(|err| MockError::InvalidParameter {
        name: "etag",
        reason: err.to_string(),
    })?;
    Ok(([(header::ETAG, etag)], Json(stored.api_key)))
}

async fn delete_api_key(
    State(repository): State<ApiKeyRepository>,
    Path((user_id, fingerprint)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, MockError> {
    let if_match = header_value(&headers, "if-match");

    repository
        .delete(&user_id, &fingerprint, if_match)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
