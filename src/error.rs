use serde_json::Value;
use thiserror::Error;

use crate::dto::rpc::RpcError;

// Server error codes with a dedicated variant. Codes are unique keys, so
// classification needs no tie-breaking beyond table presence.
const NOT_FOUND: i64 = 4001;
const DUPLICATE_ENTRY: i64 = 4002;
const ALREADY_ACTIVE: i64 = 4009;
const ALREADY_INACTIVE: i64 = 4010;
const UNKNOWN_OPTION: i64 = 3005;
const VALIDATION_ERROR: i64 = 3009;

/// Errors surfaced by FreeIPA client operations.
///
/// Server-reported failures carry the server's message text and numeric
/// error code; transport failures carry the HTTP status where one exists.
#[derive(Debug, Error)]
pub enum IpaError {
    /// Bad credentials, or a missing/expired session.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The requested entry does not exist.
    #[error("not found: {message}")]
    NotFound { message: String, code: i64 },

    /// An entry with the same identity already exists.
    #[error("duplicate entry: {message}")]
    DuplicateEntry { message: String, code: i64 },

    #[error("already active: {message}")]
    AlreadyActive { message: String, code: i64 },

    #[error("already inactive: {message}")]
    AlreadyInactive { message: String, code: i64 },

    /// Server-side validation failure, including partial failures reported
    /// by membership operations.
    #[error("validation error: {message}")]
    Validation { message: String, code: Option<i64> },

    #[error("unknown option: {message}")]
    UnknownOption { message: String, code: i64 },

    /// Any server error code without a dedicated variant, and any non-2xx,
    /// non-401 HTTP status.
    #[error("bad request: {message}")]
    BadRequest { message: String, code: Option<i64> },

    /// HTTP transport-layer failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl IpaError {
    /// Classifies a server-reported RPC error by its numeric code.
    ///
    /// Codes absent from the table fall back to [`IpaError::BadRequest`],
    /// preserving the original message and code.
    pub fn from_rpc(error: RpcError) -> Self {
        let RpcError { message, code } = error;
        match code {
            NOT_FOUND => Self::NotFound { message, code },
            DUPLICATE_ENTRY => Self::DuplicateEntry { message, code },
            ALREADY_ACTIVE => Self::AlreadyActive { message, code },
            ALREADY_INACTIVE => Self::AlreadyInactive { message, code },
            UNKNOWN_OPTION => Self::UnknownOption { message, code },
            VALIDATION_ERROR => Self::Validation {
                message,
                code: Some(code),
            },
            _ => Self::BadRequest {
                message,
                code: Some(code),
            },
        }
    }

    /// Server error code or HTTP status carried by this error, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::NotFound { code, .. }
            | Self::DuplicateEntry { code, .. }
            | Self::AlreadyActive { code, .. }
            | Self::AlreadyInactive { code, .. }
            | Self::UnknownOption { code, .. } => Some(*code),
            Self::Validation { code, .. } | Self::BadRequest { code, .. } => *code,
            Self::Unauthorized { .. } | Self::Request(_) | Self::Json(_) => None,
        }
    }
}

/// Checks the `failed` substructure of a membership mutation result.
///
/// Group and hostgroup member operations report partial failures inside an
/// otherwise successful response. Any non-empty per-category failure list
/// turns the call into a [`IpaError::Validation`] carrying the whole
/// `failed` substructure as its message. Callers opt out per call via the
/// `skip_errors` flag on the wrapper methods.
pub fn check_membership(result: &Value) -> Result<(), IpaError> {
    let Some(failed) = result.get("failed") else {
        return Ok(());
    };
    if has_failures(failed) {
        return Err(IpaError::Validation {
            message: failed.to_string(),
            code: None,
        });
    }
    Ok(())
}

fn has_failures(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => map.values().any(has_failures),
        _ => false,
    }
}
