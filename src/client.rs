use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::dto::{FindOptions, GroupAttributes, HostAttributes, Members, UserAttributes};
use crate::error::{check_membership, IpaError};
use crate::session::IpaSession;

/// API version sent with every request unless the caller supplies one.
pub const DEFAULT_API_VERSION: &str = "2.215";

/// FreeIPA client: request dispatch plus convenience wrappers for common
/// commands.
///
/// Every wrapper funnels through [`IpaClient::request`], which normalizes
/// arguments into the wire envelope and unwraps the response. Commands
/// without a wrapper can be called directly through `request` with the
/// server-side command name.
pub struct IpaClient {
    session: IpaSession,
    version: Option<String>,
}

impl IpaClient {
    /// Creates a client for `https://{host}/ipa` with the default API
    /// version.
    pub fn new(host: &str, verify_tls: bool) -> Result<Self, IpaError> {
        Ok(Self::from_session(IpaSession::new(host, verify_tls)?))
    }

    /// Creates a client from a loaded configuration file.
    pub fn from_config(config: &Config) -> Result<Self, IpaError> {
        let mut client = Self::new(&config.freeipa.host, config.freeipa.verify_tls)?;
        if let Some(version) = &config.freeipa.api_version {
            client.version = Some(version.clone());
        }
        Ok(client)
    }

    /// Wraps an existing session, e.g. one created with
    /// [`IpaSession::from_base_url`].
    pub fn from_session(session: IpaSession) -> Self {
        Self {
            session,
            version: Some(DEFAULT_API_VERSION.to_owned()),
        }
    }

    /// Overrides the default API version, or disables version injection
    /// entirely with `None`.
    #[must_use]
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn session(&self) -> &IpaSession {
        &self.session
    }

    /// Logs in, establishing the session cookie used by all subsequent
    /// requests. See [`IpaSession::login`].
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), IpaError> {
        self.session.login(username, password).await
    }

    /// Sends one command and unwraps the response.
    ///
    /// A scalar `args` value is wrapped into a one-element positional list;
    /// `None` becomes `[null]`, the single positional slot the server
    /// expects even for argument-less commands. An already-array value
    /// passes through unchanged. The client's API version is inserted into
    /// `params` only when the caller did not supply one.
    ///
    /// On an error response the classified [`IpaError`] is returned; on
    /// success the `result` value is returned verbatim. Its shape varies
    /// per command.
    pub async fn request(
        &self,
        method: &str,
        args: Option<Value>,
        params: Option<Map<String, Value>>,
    ) -> Result<Value, IpaError> {
        let args = normalize_args(args);
        let mut params = params.unwrap_or_default();
        apply_version(&mut params, self.version.as_deref());

        let response = self.session.send(method, args, params).await?;
        if let Some(error) = response.error {
            return Err(IpaError::from_rpc(error));
        }
        Ok(response.result)
    }

    /// Checks connectivity and the session with the server's `ping`
    /// command.
    pub async fn ping(&self) -> Result<Value, IpaError> {
        self.request("ping", None, None).await
    }

    // ========================================================================
    // User Operations
    // ========================================================================

    pub async fn user_add(
        &self,
        uid: &str,
        attributes: &UserAttributes,
    ) -> Result<Value, IpaError> {
        self.request("user_add", Some(json!(uid)), Some(to_params(attributes)?))
            .await
    }

    pub async fn user_show(&self, uid: &str, all: bool) -> Result<Value, IpaError> {
        let mut params = Map::new();
        params.insert("all".to_owned(), json!(all));
        self.request("user_show", Some(json!(uid)), Some(params))
            .await
    }

    /// Searches users. `criteria` is matched against login, names and
    /// description; `None` lists all users up to the size limit.
    pub async fn user_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> Result<Value, IpaError> {
        self.request(
            "user_find",
            criteria.map(|c| json!(c)),
            Some(to_params(options)?),
        )
        .await
    }

    pub async fn user_mod(
        &self,
        uid: &str,
        attributes: &UserAttributes,
    ) -> Result<Value, IpaError> {
        self.request("user_mod", Some(json!(uid)), Some(to_params(attributes)?))
            .await
    }

    /// Deletes a user. With `continue_on_error` the server keeps going on
    /// partial failure instead of aborting the operation.
    pub async fn user_del(&self, uid: &str, continue_on_error: bool) -> Result<Value, IpaError> {
        let mut params = Map::new();
        if continue_on_error {
            params.insert("continue".to_owned(), json!(true));
        }
        self.request("user_del", Some(json!(uid)), Some(params))
            .await
    }

    /// Enables a disabled user. Enabling twice yields
    /// [`IpaError::AlreadyActive`].
    pub async fn user_enable(&self, uid: &str) -> Result<Value, IpaError> {
        self.request("user_enable", Some(json!(uid)), None).await
    }

    /// Disables a user. Disabling twice yields
    /// [`IpaError::AlreadyInactive`].
    pub async fn user_disable(&self, uid: &str) -> Result<Value, IpaError> {
        self.request("user_disable", Some(json!(uid)), None).await
    }

    // ========================================================================
    // Group Operations
    // ========================================================================

    pub async fn group_add(
        &self,
        cn: &str,
        attributes: &GroupAttributes,
    ) -> Result<Value, IpaError> {
        self.request("group_add", Some(json!(cn)), Some(to_params(attributes)?))
            .await
    }

    pub async fn group_show(&self, cn: &str, all: bool) -> Result<Value, IpaError> {
        let mut params = Map::new();
        params.insert("all".to_owned(), json!(all));
        self.request("group_show", Some(json!(cn)), Some(params))
            .await
    }

    pub async fn group_find(
        &self,
        criteria: Option<&str>,
        options: &FindOptions,
    ) -> Result<Value, IpaError> {
        self.request(
            "group_find",
            criteria.map(|c| json!(c)),
            Some(to_params(options)?),
        )
        .await
    }

    pub async fn group_del(&self, cn: &str) -> Result<Value, IpaError> {
        self.request("group_del", Some(json!(cn)), None).await
    }

    /// Adds members to a group.
    ///
    /// Membership mutations report per-member failures inside a successful
    /// response. Unless `skip_errors` is set, any reported failure raises
    /// [`IpaError::Validation`] carrying the `failed` substructure; with
    /// `skip_errors` the partial result is returned as-is.
    pub async fn group_add_member(
        &self,
        cn: &str,
        members: &Members,
        skip_errors: bool,
    ) -> Result<Value, IpaError> {
        let result = self
            .request(
                "group_add_member",
                Some(json!(cn)),
                Some(to_params(members)?),
            )
            .await?;
        if !skip_errors {
            check_membership(&result)?;
        }
        Ok(result)
    }

    /// Removes members from a group. Partial failures behave as in
    /// [`IpaClient::group_add_member`].
    pub async fn group_remove_member(
        &self,
        cn: &str,
        members: &Members,
        skip_errors: bool,
    ) -> Result<Value, IpaError> {
        let result = self
            .request(
                "group_remove_member",
                Some(json!(cn)),
                Some(to_params(members)?),
            )
            .await?;
        if !skip_errors {
            check_membership(&result)?;
        }
        Ok(result)
    }

    // ========================================================================
    // Host Operations
    // ========================================================================

    pub async fn host_add(
        &self,
        fqdn: &str,
        attributes: &HostAttributes,
    ) -> Result<Value, IpaError> {
        self.request("host_add", Some(json!(fqdn)), Some(to_params(attributes)?))
            .await
    }

    pub async fn host_show(&self, fqdn: &str, all: bool) -> Result<Value, IpaError> {
        let mut params = Map::new();
        params.insert("all".to_owned(), json!(all));
        self.request("host_show", Some(json!(fqdn)), Some(params))
            .await
    }

    pub async fn host_del(&self, fqdn: &str) -> Result<Value, IpaError> {
        self.request("host_del", Some(json!(fqdn)), None).await
    }

    /// Adds members to a hostgroup. Partial failures behave as in
    /// [`IpaClient::group_add_member`].
    pub async fn hostgroup_add_member(
        &self,
        cn: &str,
        members: &Members,
        skip_errors: bool,
    ) -> Result<Value, IpaError> {
        let result = self
            .request(
                "hostgroup_add_member",
                Some(json!(cn)),
                Some(to_params(members)?),
            )
            .await?;
        if !skip_errors {
            check_membership(&result)?;
        }
        Ok(result)
    }

    /// Removes members from a hostgroup. Partial failures behave as in
    /// [`IpaClient::group_add_member`].
    pub async fn hostgroup_remove_member(
        &self,
        cn: &str,
        members: &Members,
        skip_errors: bool,
    ) -> Result<Value, IpaError> {
        let result = self
            .request(
                "hostgroup_remove_member",
                Some(json!(cn)),
                Some(to_params(members)?),
            )
            .await?;
        if !skip_errors {
            check_membership(&result)?;
        }
        Ok(result)
    }
}

fn normalize_args(args: Option<Value>) -> Vec<Value> {
    match args {
        None => vec![Value::Null],
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    }
}

fn apply_version(params: &mut Map<String, Value>, version: Option<&str>) {
    if let Some(version) = version {
        params
            .entry("version")
            .or_insert_with(|| Value::String(version.to_owned()));
    }
}

fn to_params<T: Serialize>(options: &T) -> Result<Map<String, Value>, IpaError> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
