//! Shared types for the Slate admin console
//!
//! Common types used across the client and console crates: wire models,
//! error codes, and the platform's request/response envelopes.

pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::PageRequest;
pub use response::{ApiResponse, PageResponse, Pagination};
