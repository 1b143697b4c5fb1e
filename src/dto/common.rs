use serde::{Deserialize, Serialize};

/// Options shared by the `*_find` search commands.
///
/// Unset fields are omitted from the wire params entirely rather than sent
/// as null; explicitly-set falsy values (`false`, `0`, `""`) are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FindOptions {
    /// Retrieve all attributes, not just the default set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    /// Return raw LDAP attribute names and values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizelimit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timelimit: Option<u32>,
}

/// Member lists for group and hostgroup membership mutations.
///
/// Field names follow the server's per-category parameter names, so this
/// struct serializes directly into the wire params of `*_add_member` and
/// `*_remove_member`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Members {
    #[serde(rename = "user", skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(rename = "group", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(rename = "host", skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(rename = "hostgroup", skip_serializing_if = "Option::is_none")]
    pub hostgroups: Option<Vec<String>>,
}
