use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::errors::MockError;
use crate::pagination::{OPC_NEXT_PAGE, PageQuery};

/// A patch of a database home, kept as the raw JSON of the service.
pub(crate) type PatchSummary = serde_json::Value;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct DbHome {
    db_home_id: String,
    patches: Vec<PatchSummary>,
}

#[derive(Clone)]
pub(crate) struct PatchRepository {
    patches: Arc<HashMap<String, Vec<PatchSummary>>>,
}

impl PatchRepository {
    pub(crate) fn new() -> Result<Self, MockError> {
        let json = include_str!("../data/db_homes.json");
        let homes = serde_json::from_str::<Vec<DbHome>>(json)?;
        let patches = homes
            .into_iter()
            .map(|home| (home.db_home_id, home.patches))
            .collect();

        Ok(Self {
            patches: Arc::new(patches),
        })
    }

    fn patches(&self, db_home_id: &str) -> Result<&[PatchSummary], MockError> {
        self.patches
            .get(db_home_id)
            .map(Vec::as_slice)
            .ok_or_else(|| MockError::NotFound {
                resource: format!("DB home {db_home_id}"),
            })
    }
}

pub(crate) fn database_router() -> Router<AppState> {
    Router::new().route("/dbHomes/{db_home_id}/patches", get(list_db_home_patches))
}

async fn list_db_home_patches(
    State(repository): State<PatchRepository>,
    Path(db_home_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, MockError> {
    let patches = repository.patches(&db_home_id)?;
    let page = query.paginate(patches)?;

    let mut response = Json(&page.items).into_response();
    if let Some(cursor) = page.next_page_header() {
        response.headers_mut().insert(OPC_NEXT_PAGE, cursor);
    }
    Ok(response)
}
