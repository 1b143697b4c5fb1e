use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outbound JSON-RPC envelope.
///
/// FreeIPA's convention is a two-element `params` array: the positional
/// argument list first, the named option object second. The tuple field
/// serializes to exactly that shape.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub method: String,
    pub params: (Vec<Value>, Map<String, Value>),
}

/// Decoded JSON-RPC response envelope.
///
/// Both `result` and `error` keys are structurally present in every
/// response; exactly one is meaningful. When `error` is non-null the
/// `result` value must be treated as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Value,
    pub error: Option<RpcError>,
    #[serde(default)]
    pub principal: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Error object found inside an error response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}
