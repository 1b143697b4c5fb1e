//! # freeipa-rs
//!
//! A Rust client library for the FreeIPA identity-management JSON-RPC API,
//! featuring session-based authentication, a generic request dispatcher for
//! any server-defined command, and a typed error taxonomy for server error
//! codes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use freeipa_rs::{Config, IpaClient};
//! use freeipa_rs::dto::UserAttributes;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Load configuration from config.toml
//! let config = Config::new()?;
//!
//! // Create a client and log in
//! let mut client = IpaClient::from_config(&config)?;
//! client
//!     .login(&config.freeipa.username, &config.freeipa.password)
//!     .await?;
//!
//! // Add a user
//! let attributes = UserAttributes {
//!     givenname: Some("Alice".to_string()),
//!     sn: Some("Lebowski".to_string()),
//!     cn: Some("Alice Lebowski".to_string()),
//!     ..Default::default()
//! };
//! client.user_add("alice", &attributes).await?;
//!
//! // Any command without a wrapper goes through the raw dispatcher
//! let result = client.request("dnszone_find", None, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Session transport**: username/password login establishing a session
//!   cookie that rides along on every subsequent request
//! - **Generic dispatch**: call any of the server's commands by name with
//!   positional arguments and named parameters
//! - **Typed errors**: server error codes classified into an
//!   [`IpaError`] variant, including partial-failure detection for
//!   membership operations
//! - **Command wrappers**: typed convenience methods for common user,
//!   group and host operations
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your server and credentials:
//!
//! ```toml
//! [freeipa]
//! host = "ipa.demo1.freeipa.org"
//! username = "admin"
//! password = "Secret123"
//! verify_tls = true
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod session;

// Re-export commonly used types at the crate root
pub use client::{IpaClient, DEFAULT_API_VERSION};
pub use config::Config;
pub use dto::*;
pub use error::IpaError;
pub use session::IpaSession;
