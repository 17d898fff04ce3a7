use serde::{Deserialize, Serialize};

/// A version of the VMware software bundled with an SDDC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedVmwareSoftwareVersionSummary {
    /// A short, unique string that identifies the version of bundled software.
    pub version: String,
    /// A description of the software in the bundle.
    pub description: String,
}

/// One page of supported versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedVmwareSoftwareVersionCollection {
    /// The versions, in server order.
    pub items: Vec<SupportedVmwareSoftwareVersionSummary>,
}
