use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::string_enum;

string_enum! {
    /// An action that can be performed on a patch.
    pub enum PatchAction {
        Apply => "APPLY",
        Precheck => "PRECHECK",
    }
}

string_enum! {
    /// The state of the last action performed on a patch.
    pub enum PatchLifecycleState {
        Available => "AVAILABLE",
        Success => "SUCCESS",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
    }
}

/// A patch applicable to a database home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSummary {
    /// The OCID of the patch.
    pub id: String,
    /// The text describing this patch package.
    pub description: String,
    /// Action that is currently being performed or was completed last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action: Option<PatchAction>,
    /// Actions that can possibly be performed using this patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_actions: Option<Vec<PatchAction>>,
    /// A description of the current lifecycle state in more detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<PatchLifecycleState>,
    /// The date and time that the patch was released.
    pub time_released: DateTime<Utc>,
    /// The version of this patch package.
    pub version: String,
}
