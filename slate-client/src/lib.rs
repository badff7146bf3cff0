//! Slate Client - HTTP client for the admin API
//!
//! Typed wrappers over the platform's admin REST endpoints, with two
//! interchangeable transports:
//!
//! - [`NetworkHttpClient`]: real HTTP over reqwest
//! - [`OneshotHttpClient`]: in-process calls against an axum `Router`
//!   (feature `in-process`), used by integration tests

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::SlateClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use self::http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use self::http::OneshotHttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserPermission};
pub use shared::response::{ApiResponse, PageResponse};
