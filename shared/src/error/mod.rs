//! Unified error module
//!
//! Error codes, categories and the application error type shared by the
//! client and console crates.

pub mod category;
pub mod codes;
pub mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
