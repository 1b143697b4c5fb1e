pub mod common;
pub mod group;
pub mod host;
pub mod rpc;
pub mod user;

// Re-export commonly used types for convenience
pub use common::*;
pub use group::*;
pub use host::*;
pub use rpc::{JsonRpcRequest, JsonRpcResponse, RpcError};
pub use user::*;
