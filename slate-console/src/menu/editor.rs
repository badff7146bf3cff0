//! Menu editor
//!
//! Glues the gesture state machine to the reorder endpoint. There is no
//! optimistic local reordering: a resolved drop issues exactly one
//! mutation, then the menu snapshot and the user's navigation cache are
//! invalidated and the tree is refetched and swapped wholesale.

use super::drag::DropHit;
use super::session::{DragSession, GesturePhase, ResolvedDrop};
use super::tree::{build_menu_tree, find_parent_id, flatten_tree, PARENT_NOT_FOUND};
use crate::error::{EditorError, EditorResult};
use crate::store::QueryCache;
use shared::models::{Menu, MenuCreate, MenuOrder, MenuUpdate, MENU_ROOT_PARENT};
use slate_client::{HttpClient, SlateClient};
use std::sync::Arc;
use validator::Validate;

/// Cache key of the menu snapshot
pub const MENU_LIST_KEY: &str = "menuList";

/// Cache key of the per-user navigation, rebuilt after menu mutations
pub const USER_PERMISSION_KEY: &str = "userPermissionlist";

/// Stateful menu hierarchy editor
pub struct MenuEditor<C: HttpClient> {
    client: SlateClient<C>,
    cache: Arc<QueryCache>,
    session: DragSession,
    tree: Vec<Menu>,
}

impl<C: HttpClient> MenuEditor<C> {
    pub fn new(client: SlateClient<C>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            session: DragSession::new(),
            tree: Vec::new(),
        }
    }

    /// Current tree snapshot
    pub fn tree(&self) -> &[Menu] {
        &self.tree
    }

    /// Current gesture phase
    pub fn phase(&self) -> GesturePhase {
        self.session.phase()
    }

    /// Refetch the canonical list and swap the snapshot atomically
    ///
    /// The endpoint may hand the list back flat or pre-nested; both are
    /// normalized through flatten + rebuild.
    pub async fn refresh(&mut self) -> EditorResult<()> {
        let listed = self.client.menus().tree().await?;
        let tree = build_menu_tree(flatten_tree(listed));
        self.cache.put(MENU_LIST_KEY, serde_json::to_value(&tree)?);
        self.tree = tree;
        Ok(())
    }

    // ==================== Gesture input ====================

    pub fn begin_drag(&mut self, drag_id: i64) {
        self.session.begin(drag_id);
    }

    pub fn hover_row(&mut self, hover_id: i64, cursor_y: f64, row_height: f64) {
        self.session.hover_row(hover_id, cursor_y, row_height);
    }

    pub fn hover_top_zone(&mut self, cursor_y: f64, zone_height: f64) {
        self.session.hover_top_zone(cursor_y, zone_height);
    }

    pub fn hover_child_strip(&mut self, hover_id: i64) {
        self.session.hover_child_strip(hover_id);
    }

    pub fn clear_hover(&mut self) {
        self.session.clear_hover();
    }

    /// Translate a resolved drop into the reorder payload
    ///
    /// Siblings must share the hovered entry's parent, so the sibling case
    /// runs the parent lookup; a failed lookup aborts the drop instead of
    /// submitting a `-1` parent.
    pub fn order_for(&self, drop: &ResolvedDrop) -> EditorResult<MenuOrder> {
        let order = match drop.hit {
            DropHit::TopLevel { before_first } => MenuOrder {
                menu_id: drop.drag_id,
                target_menu_id: if before_first {
                    self.tree.first().map(|m| m.menu_id)
                } else {
                    None
                },
                parent_id: MENU_ROOT_PARENT,
            },
            DropHit::Child { hover_id } => MenuOrder {
                menu_id: drop.drag_id,
                target_menu_id: None,
                parent_id: hover_id,
            },
            DropHit::Sibling { hover_id, before } => {
                let parent_id = find_parent_id(&self.tree, hover_id);
                if parent_id == PARENT_NOT_FOUND {
                    return Err(EditorError::TargetVanished { menu_id: hover_id });
                }
                MenuOrder {
                    menu_id: drop.drag_id,
                    target_menu_id: before.then_some(hover_id),
                    parent_id,
                }
            }
        };
        Ok(order)
    }

    /// Release the current gesture and run the full command/response cycle
    ///
    /// Returns the submitted payload, or `None` when the gesture resolved
    /// to a no-op (self-drop, release outside every zone, no gesture).
    /// On failure the pre-mutation snapshot stays in place; there is no
    /// automatic retry.
    pub async fn complete_drop(&mut self) -> EditorResult<Option<MenuOrder>> {
        let Some(resolved) = self.session.release() else {
            return Ok(None);
        };

        let order = self.order_for(&resolved)?;
        self.client.menus().order(&order).await?;
        self.invalidate_and_refresh().await?;
        Ok(Some(order))
    }

    // ==================== Dialog mutations ====================

    /// Create an entry, then refetch
    pub async fn add(&mut self, create: &MenuCreate) -> EditorResult<()> {
        create.validate()?;
        self.client.menus().add(create).await?;
        self.invalidate_and_refresh().await
    }

    /// Update an entry, then refetch
    pub async fn update(&mut self, update: &MenuUpdate) -> EditorResult<()> {
        update.validate()?;
        self.client.menus().update(update).await?;
        self.invalidate_and_refresh().await
    }

    /// Delete an entry, then refetch
    pub async fn delete(&mut self, menu_id: i64) -> EditorResult<()> {
        self.client.menus().delete(menu_id).await?;
        self.invalidate_and_refresh().await
    }

    async fn invalidate_and_refresh(&mut self) -> EditorResult<()> {
        self.cache.invalidate(MENU_LIST_KEY);
        self.cache.invalidate(USER_PERMISSION_KEY);
        self.refresh().await
    }
}
