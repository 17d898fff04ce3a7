use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::string_enum;

string_enum! {
    /// The lifecycle state of an API key.
    pub enum ApiKeyLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

/// A PEM-format RSA public key used to sign the requests of a user.
///
/// The `fingerprint` identifies the key within the user, it is the `{fingerprint}` path
/// parameter of the delete operation.
///
/// The provider marks none of these fields as mandatory, an absent field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// An Oracle-assigned identifier for the key, `{tenancyId}/{userId}/{fingerprint}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    /// The key's value, in PEM format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
    /// The key's fingerprint, e.g. `12:34:56:78:90:ab:cd:ef:12:34:56:78:90:ab:cd:ef`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// The OCID of the user the key belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Date and time the key was created, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// Date and time the key was last changed, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_modified: Option<DateTime<Utc>>,
    /// The key's current state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ApiKeyLifecycleState>,
    /// The detailed status of `INACTIVE` keys, as a bit field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_status: Option<i64>,
}

/// The body of an upload: the public key only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyDetails {
    /// The public key, in PEM format.
    pub key: String,
}
