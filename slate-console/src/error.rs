//! Console error types

use thiserror::Error;

/// Errors surfaced by the menu editor and screen controllers
#[derive(Debug, Error)]
pub enum EditorError {
    /// Transport or business error from the admin API
    #[error(transparent)]
    Client(#[from] slate_client::ClientError),

    /// Form-level validation failed before submit
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Snapshot (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The hovered entry vanished from the tree between hover and drop
    ///
    /// Parent lookup came back empty for the drop target, so no reorder
    /// is submitted.
    #[error("drop target {menu_id} no longer exists")]
    TargetVanished { menu_id: i64 },
}

/// Result type for console operations
pub type EditorResult<T> = Result<T, EditorError>;
