//! Data models
//!
//! Wire types shared between the admin backend and the console. The JSON
//! field casing is the backend's (camelCase), so every model carries
//! `#[serde(rename_all = "camelCase")]`. Create/update payloads derive
//! `validator::Validate` for form-level checks before submit.

pub mod episode;
pub mod homepage;
pub mod menu;
pub mod permission;
pub mod reward;
pub mod role;
pub mod series;
pub mod tag;
pub mod task;

// Re-exports
pub use episode::*;
pub use homepage::*;
pub use menu::*;
pub use permission::*;
pub use reward::*;
pub use role::*;
pub use series::*;
pub use tag::*;
pub use task::*;
