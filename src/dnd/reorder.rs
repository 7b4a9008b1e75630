//! Insertion index and sibling shift math for linear containers
//!
//! Both functions are pure and recompute from absolute positions, so missing
//! intermediate pointer events never leaves stale state behind.

use crate::geometry::{Axis, Point, Rect};

/// Index of the first item whose midpoint lies past the pointer along `axis`
///
/// Returns `item_rects.len()` (append) when the pointer is past every item.
pub fn compute_insertion_index(pointer: Point, item_rects: &[Rect], axis: Axis) -> usize {
    let coord = pointer.along(axis);
    item_rects
        .iter()
        .position(|rect| rect.midpoint(axis) > coord)
        .unwrap_or(item_rects.len())
}

/// Inputs for [`compute_shift_offset`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftState {
    /// Index of the dragged item when it belongs to this container
    pub origin: Option<usize>,
    /// Current insertion index, `None` while the pointer is elsewhere
    pub insertion: Option<usize>,
    /// Size of one item along the container's axis
    pub item_size: f32,
}

/// Visual offset for the item at `item_index` so siblings make room
///
/// - Reordering within the container: items between the origin and the
///   insertion slot slide one slot toward the origin, closing the gap the
///   dragged item left.
/// - Inserting from another container: items at or after the insertion
///   index slide forward to open a gap.
/// - The dragged item itself never shifts; it follows the pointer.
pub fn compute_shift_offset(item_index: usize, state: &ShiftState) -> f32 {
    let Some(insertion) = state.insertion else {
        return 0.0;
    };

    match state.origin {
        Some(origin) if item_index == origin => 0.0,
        Some(origin) if origin < insertion => {
            if item_index > origin && item_index < insertion {
                -state.item_size
            } else {
                0.0
            }
        }
        Some(origin) => {
            if item_index >= insertion && item_index < origin {
                state.item_size
            } else {
                0.0
            }
        }
        None => {
            if item_index >= insertion {
                state.item_size
            } else {
                0.0
            }
        }
    }
}
