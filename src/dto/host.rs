use serde::{Deserialize, Serialize};

/// Named options for `host_add`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Add a DNS record for the host at enrollment time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Skip the DNS resolution check for the host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    /// Host locality, e.g. a datacenter or rack label.
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
}
