//! Drag-gesture state machine
//!
//! One gesture at a time: idle → dragging → resolved. All drag state
//! lives here, behind a single owner, instead of being scattered across
//! per-zone handlers. Hover updates mutate the live cursor offset on
//! every pointer move; release resolves at most once per gesture, and
//! later input is ignored until the next gesture begins.

use super::drag::{
    resolve_child_strip_drop, resolve_row_drop, resolve_top_level_drop, DropHit,
};

/// Zone currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hover {
    /// Over a menu row
    Row {
        hover_id: i64,
        cursor_y: f64,
        row_height: f64,
    },
    /// Over the top-level zone above the first row
    TopZone { cursor_y: f64, zone_height: f64 },
    /// Over the child strip below a row
    ChildStrip { hover_id: i64 },
}

/// Phase of the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        drag_id: i64,
        hover: Option<Hover>,
    },
    /// A drop already fired its mutation this gesture
    Resolved,
}

/// Outcome of a released gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDrop {
    pub drag_id: i64,
    pub hit: DropHit,
}

/// Single-owner drag state
#[derive(Debug, Default)]
pub struct DragSession {
    phase: GesturePhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Start a new gesture, replacing whatever came before
    pub fn begin(&mut self, drag_id: i64) {
        self.phase = GesturePhase::Dragging {
            drag_id,
            hover: None,
        };
    }

    /// Pointer moved over a row
    pub fn hover_row(&mut self, hover_id: i64, cursor_y: f64, row_height: f64) {
        self.set_hover(Hover::Row {
            hover_id,
            cursor_y,
            row_height,
        });
    }

    /// Pointer moved over the top-level zone
    pub fn hover_top_zone(&mut self, cursor_y: f64, zone_height: f64) {
        self.set_hover(Hover::TopZone {
            cursor_y,
            zone_height,
        });
    }

    /// Pointer moved over a child strip
    pub fn hover_child_strip(&mut self, hover_id: i64) {
        self.set_hover(Hover::ChildStrip { hover_id });
    }

    /// Pointer left every drop zone
    pub fn clear_hover(&mut self) {
        if let GesturePhase::Dragging { hover, .. } = &mut self.phase {
            *hover = None;
        }
    }

    fn set_hover(&mut self, new_hover: Hover) {
        if let GesturePhase::Dragging { hover, .. } = &mut self.phase {
            *hover = Some(new_hover);
        }
    }

    /// Release the gesture
    ///
    /// Resolves the last hover into a [`ResolvedDrop`] at most once. A
    /// release outside any zone, on the dragged entry itself, or outside
    /// an active gesture produces nothing and returns the session to
    /// idle.
    pub fn release(&mut self) -> Option<ResolvedDrop> {
        let GesturePhase::Dragging { drag_id, hover } = self.phase else {
            return None;
        };

        let hit = match hover {
            Some(Hover::Row {
                hover_id,
                cursor_y,
                row_height,
            }) => resolve_row_drop(drag_id, hover_id, cursor_y, row_height),
            Some(Hover::TopZone {
                cursor_y,
                zone_height,
            }) => Some(resolve_top_level_drop(cursor_y, zone_height)),
            Some(Hover::ChildStrip { hover_id }) => resolve_child_strip_drop(drag_id, hover_id),
            None => None,
        };

        match hit {
            Some(hit) => {
                self.phase = GesturePhase::Resolved;
                Some(ResolvedDrop { drag_id, hit })
            }
            None => {
                self.phase = GesturePhase::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_release_is_ignored() {
        let mut session = DragSession::new();
        assert_eq!(session.release(), None);
        assert_eq!(session.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_hover_ignored_without_gesture() {
        let mut session = DragSession::new();
        session.hover_row(1, 5.0, 40.0);
        assert_eq!(session.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_full_gesture_resolves_once() {
        let mut session = DragSession::new();
        session.begin(3);
        session.hover_row(1, 10.0, 40.0);
        session.hover_row(1, 20.0, 40.0); // live update, last one wins

        let drop = session.release().unwrap();
        assert_eq!(drop.drag_id, 3);
        assert_eq!(drop.hit, DropHit::Child { hover_id: 1 });
        assert_eq!(session.phase(), GesturePhase::Resolved);

        // further input is ignored until a new gesture begins
        session.hover_row(1, 5.0, 40.0);
        assert_eq!(session.release(), None);
    }

    #[test]
    fn test_release_outside_zone_returns_to_idle() {
        let mut session = DragSession::new();
        session.begin(3);
        session.hover_row(1, 10.0, 40.0);
        session.clear_hover();

        assert_eq!(session.release(), None);
        assert_eq!(session.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_self_drop_returns_to_idle_without_hit() {
        let mut session = DragSession::new();
        session.begin(1);
        session.hover_row(1, 20.0, 40.0);

        assert_eq!(session.release(), None);
        assert_eq!(session.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_top_zone_gesture() {
        let mut session = DragSession::new();
        session.begin(7);
        session.hover_top_zone(1.0, 8.0);

        let drop = session.release().unwrap();
        assert_eq!(drop.hit, DropHit::TopLevel { before_first: true });
    }

    #[test]
    fn test_new_gesture_after_resolved() {
        let mut session = DragSession::new();
        session.begin(2);
        session.hover_child_strip(5);
        assert!(session.release().is_some());

        session.begin(4);
        assert_eq!(
            session.phase(),
            GesturePhase::Dragging {
                drag_id: 4,
                hover: None
            }
        );
    }
}
