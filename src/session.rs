use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, REFERER};
use reqwest::{Client, StatusCode, Url};
use serde_json::{Map, Value};
use tracing::debug;

use crate::dto::rpc::{JsonRpcRequest, JsonRpcResponse};
use crate::error::IpaError;

/// Authenticated HTTP session against a single FreeIPA server.
///
/// The session cookie acquired by [`IpaSession::login`] lives in an owned
/// cookie jar and rides along on every subsequent request made through the
/// same session. The jar is only ever written by `login`; re-login simply
/// replaces the cookie.
///
/// The state machine is two states, unauthenticated and authenticated.
/// Requests issued before a successful login are rejected by the server
/// with 401, which surfaces as [`IpaError::Unauthorized`].
pub struct IpaSession {
    http: Client,
    cookies: Arc<Jar>,
    base_url: String,
}

impl IpaSession {
    /// Creates a session for `https://{host}/ipa`.
    ///
    /// `verify_tls` controls server certificate verification; IPA
    /// deployments frequently run on a private CA.
    pub fn new(host: &str, verify_tls: bool) -> Result<Self, IpaError> {
        Self::from_base_url(format!("https://{host}/ipa"), verify_tls)
    }

    /// Creates a session against an explicit base URL.
    ///
    /// [`IpaSession::new`] is the common path; this exists for
    /// non-standard deployments and tests.
    pub fn from_base_url(base_url: impl Into<String>, verify_tls: bool) -> Result<Self, IpaError> {
        let cookies = Arc::new(Jar::default());
        let http = Client::builder()
            .cookie_provider(cookies.clone())
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        Ok(Self {
            http,
            cookies,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the raw `Cookie` header value for the server, if a login has
    /// succeeded (useful for handing a session to another process).
    pub fn session_cookie(&self) -> Option<String> {
        let url: Url = self.base_url.parse().ok()?;
        let header = self.cookies.cookies(&url)?;
        header.to_str().ok().map(str::to_owned)
    }

    /// Logs in with username and password, establishing the session cookie.
    ///
    /// Sends a form-encoded POST to the password-login endpoint. Any
    /// non-success status maps to [`IpaError::Unauthorized`] with the raw
    /// response body as the message. There is no retry; call again to
    /// re-authenticate.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), IpaError> {
        let form = [("user", username), ("password", password)];
        let response = self
            .http
            .post(format!("{}/session/login_password", self.base_url))
            .header(ACCEPT, "text/plain")
            // The server rejects session requests without a Referer.
            .header(REFERER, self.base_url.as_str())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        debug!("login response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(IpaError::Unauthorized { message: body });
        }
        Ok(())
    }

    /// Issues one JSON-RPC call and returns the decoded response envelope.
    ///
    /// The command name is not validated locally; unknown commands are the
    /// server's to reject. HTTP 401 maps to [`IpaError::Unauthorized`]
    /// regardless of body content; any other non-success status maps to
    /// [`IpaError::BadRequest`] with the body as message and the status as
    /// code.
    pub async fn send(
        &self,
        method: &str,
        args: Vec<Value>,
        params: Map<String, Value>,
    ) -> Result<JsonRpcResponse, IpaError> {
        let request = JsonRpcRequest {
            method: method.to_owned(),
            params: (args, params),
        };
        debug!("RPC request: {}", serde_json::to_string(&request)?);

        let response = self
            .http
            .post(format!("{}/session/json", self.base_url))
            .header(ACCEPT, "application/json")
            .header(REFERER, self.base_url.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("RPC response status {}: {}", status, body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(IpaError::Unauthorized {
                message: String::new(),
            });
        }
        if !status.is_success() {
            return Err(IpaError::BadRequest {
                message: body,
                code: Some(i64::from(status.as_u16())),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
