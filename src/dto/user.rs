use serde::{Deserialize, Serialize};

/// Named options for `user_add` and `user_mod`.
///
/// Field names match the server's parameter names. Unset fields are omitted
/// from the request, which is how the server distinguishes "leave alone"
/// from "clear".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub givenname: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sn: Option<String>,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uidnumber: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gidnumber: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loginshell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homedirectory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userpassword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephonenumber: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou: Option<String>,
}
