use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::errors::MockError;
use crate::pagination::{OPC_NEXT_PAGE, PageQuery};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedVmwareSoftwareVersionSummary {
    pub version: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
struct SupportedVmwareSoftwareVersionCollection<'a> {
    items: &'a [SupportedVmwareSoftwareVersionSummary],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListVersionsQuery {
    compartment_id: Option<String>,
    limit: Option<usize>,
    page: Option<String>,
}

#[derive(Clone)]
pub(crate) struct VersionRepository {
    versions: Arc<Vec<SupportedVmwareSoftwareVersionSummary>>,
}

impl VersionRepository {
    pub(crate) fn new() -> Result<Self, MockError> {
        let json = include_str!("../data/vmware_versions.json");
        let versions = serde_json::from_str(json)?;

        Ok(Self {
            versions: Arc::new(versions),
        })
    }
}

pub(crate) fn ocvp_router() -> Router<AppState> {
    Router::new().route(
        "/supportedVmwareSoftwareVersions",
        get(list_supported_vmware_software_versions),
    )
}

async fn list_supported_vmware_software_versions(
    State(repository): State<VersionRepository>,
    Query(query): Query<ListVersionsQuery>,
) -> Result<impl IntoResponse, MockError> {
    if query.compartment_id.as_deref().is_none_or(str::is_empty) {
        return Err(MockError::MissingParameter {
            name: "compartmentId",
        });
    }
    let ListVersionsQuery { limit, page, .. } = query;
    let page = PageQuery { limit, page }.paginate(&repository.versions)?;

    let collection = SupportedVmwareSoftwareVersionCollection { items: &page.items };
    let mut response = Json(collection).into_response();
    if let Some(cursor) = page.next_page_header() {
        response.headers_mut().insert(OPC_NEXT_PAGE, cursor);
    }
    Ok(response)
}
