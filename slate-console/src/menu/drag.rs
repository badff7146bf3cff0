//! Drop-target resolution
//!
//! Pure zone math, run on every pointer-move tick during a drag. A row is
//! split into three bands: the top quarter inserts before the hovered
//! entry, the bottom quarter after it, and the middle half makes the
//! dragged entry a child.

/// Fraction of the row height where the "insert before" band ends
pub const ROW_TOP_FRACTION: f64 = 0.25;

/// Fraction of the row height where the "insert after" band begins
pub const ROW_BOTTOM_FRACTION: f64 = 0.75;

/// Where a released drag lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropHit {
    /// Reorder among the top-level entries
    TopLevel {
        /// Place before the first root (cursor in the upper half of the
        /// top-level zone) instead of appending at the end
        before_first: bool,
    },
    /// Become a sibling of the hovered entry
    Sibling { hover_id: i64, before: bool },
    /// Become the last child of the hovered entry
    Child { hover_id: i64 },
}

/// Resolve a drop over a menu row
///
/// `cursor_y` is the pointer offset from the row's top edge. Returns
/// `None` when the entry is dropped on itself; that gesture never issues
/// a mutation.
///
/// Boundary values stay with the sibling bands: `cursor_y == 0.25 * h`
/// resolves to before, `cursor_y == 0.75 * h` to after.
pub fn resolve_row_drop(
    drag_id: i64,
    hover_id: i64,
    cursor_y: f64,
    row_height: f64,
) -> Option<DropHit> {
    if drag_id == hover_id {
        return None;
    }

    let top = row_height * ROW_TOP_FRACTION;
    let bottom = row_height * ROW_BOTTOM_FRACTION;

    if cursor_y > top && cursor_y < bottom {
        Some(DropHit::Child { hover_id })
    } else {
        Some(DropHit::Sibling {
            hover_id,
            before: cursor_y <= top,
        })
    }
}

/// Resolve a drop on the top-level zone (outside any row)
///
/// Before/after is decided against the zone's vertical midpoint.
pub fn resolve_top_level_drop(cursor_y: f64, zone_height: f64) -> DropHit {
    DropHit::TopLevel {
        before_first: cursor_y <= zone_height / 2.0,
    }
}

/// Resolve a drop on the child strip below a row
///
/// The strip bypasses the band math: the dragged entry always becomes the
/// hovered entry's last child. Self-drops stay a no-op.
pub fn resolve_child_strip_drop(drag_id: i64, hover_id: i64) -> Option<DropHit> {
    if drag_id == hover_id {
        return None;
    }
    Some(DropHit::Child { hover_id })
}
