//! Menu hierarchy editor
//!
//! The one stateful component of the console: an in-memory forest of menu
//! entries, drag-initiated reordering/reparenting, and the mutate/refetch
//! cycle against the reorder endpoint.
//!
//! Module split:
//! - [`tree`]: flat list → forest construction and parent lookup
//! - [`drag`]: pure drop-target resolution (row zones, top-level zone,
//!   child strip)
//! - [`session`]: the per-gesture state machine owning all drag state
//! - [`editor`]: glues the above to the API client and the query cache

pub mod drag;
pub mod editor;
pub mod session;
pub mod tree;

pub use drag::{resolve_child_strip_drop, resolve_row_drop, resolve_top_level_drop, DropHit};
pub use editor::MenuEditor;
pub use session::{DragSession, GesturePhase, Hover, ResolvedDrop};
pub use tree::{build_menu_tree, count_nodes, find_parent_id, flatten_tree, PARENT_NOT_FOUND};
