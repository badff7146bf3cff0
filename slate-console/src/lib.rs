//! Slate Console - console core for the admin UI
//!
//! The stateful half of the admin console, kept free of any rendering
//! concern:
//!
//! - **Menu hierarchy editor** (`menu`): tree construction, drag-target
//!   resolution, parent lookup and the drag-gesture state machine, wired
//!   to the reorder endpoint through an explicit mutate/refetch cycle
//! - **Navigation** (`nav`): sidebar tree derived from the per-user
//!   route forest
//! - **Query snapshots** (`store`): replace-on-refetch cache, invalidated
//!   (never merged) after every mutation
//! - **Screens** (`screens`): thin CRUD controllers over the typed client

pub mod error;
pub mod logger;
pub mod menu;
pub mod nav;
pub mod screens;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{EditorError, EditorResult};
pub use menu::{
    build_menu_tree, find_parent_id, DragSession, DropHit, GesturePhase, Hover, MenuEditor,
    ResolvedDrop, PARENT_NOT_FOUND,
};
pub use store::QueryCache;
