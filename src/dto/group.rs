use serde::{Deserialize, Serialize};

/// Named options for `group_add`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroupAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gidnumber: Option<i64>,
    /// Create as a non-POSIX group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonposix: Option<bool>,
    /// Allow members from a trusted external domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}
