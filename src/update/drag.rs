//! Drag-and-drop update handlers
//!
//! The drag engine only tracks the gesture; applying the resolved intent to
//! the stores happens here, in one step, on release.
//!
//! The stores stay the source of truth for where the dragged item is. A start
//! whose origin does not match them is refused, and the origin is looked up
//! again before every hover and before the drop resolves, so a layout or
//! sheet change mid-gesture never makes the drop move a different item.

use crate::commands::Cmd;
use crate::dnd::{DragPayload, DropContainer, DropIntent};
use crate::messages::DragMsg;
use crate::model::Workbench;

use super::layout::move_tool;
use super::persisted_change;

/// Update function for drag messages
pub fn update_drag(model: &mut Workbench, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start {
            payload,
            source,
            origin_index,
            pointer,
        } => {
            if model.panels.interaction().is_some() {
                return None;
            }
            // A mismatch is a host bug; refuse the gesture
            let current = current_origin(model, payload);
            if current != Some((source, origin_index)) {
                tracing::error!(
                    ?payload,
                    ?source,
                    origin_index,
                    ?current,
                    "drag start does not match the dragged item's position"
                );
                return None;
            }
            model
                .drag
                .begin(payload, source, origin_index, pointer)
                .then_some(Cmd::Redraw)
        }

        DragMsg::Hover {
            container,
            pointer,
            item_rects,
        } => {
            if !model.drag.is_dragging() {
                return None;
            }
            if !resync_session(model) {
                return Some(Cmd::Redraw);
            }
            model.drag.hover(container, pointer, &item_rects);
            Some(Cmd::Redraw)
        }

        DragMsg::Leave(container) => {
            if !model.drag.is_dragging() {
                return None;
            }
            model.drag.leave(container);
            Some(Cmd::Redraw)
        }

        DragMsg::Release => {
            if !model.drag.is_dragging() {
                return None;
            }
            if !resync_session(model) {
                return Some(Cmd::Redraw);
            }
            match model.drag.release() {
                Some(intent) => {
                    let layout_change = !matches!(intent, DropIntent::ReorderSheet { .. });
                    if apply_drop_intent(model, intent) && layout_change {
                        persisted_change(model)
                    } else {
                        Some(Cmd::Redraw)
                    }
                }
                // Released outside any container, or on its own slot
                None => Some(Cmd::Redraw),
            }
        }

        DragMsg::Cancel => model.drag.cancel().then_some(Cmd::Redraw),
    }
}

/// Where `payload` currently sits, as a drag source and index
fn current_origin(model: &Workbench, payload: DragPayload) -> Option<(DropContainer, usize)> {
    match payload {
        DragPayload::Tool(tool) => model
            .layout
            .position_of(tool)
            .map(|(location, index)| (DropContainer::Tools(location), index)),
        DragPayload::SheetTab(id) => model
            .sheets
            .index_of(id)
            .map(|index| (DropContainer::SheetTabs, index)),
    }
}

/// Re-point the active session at its payload's current position
///
/// Returns `false` when there is no session or the payload no longer exists,
/// in which case the gesture is cancelled.
fn resync_session(model: &mut Workbench) -> bool {
    let Some(payload) = model.drag.session().map(|session| session.payload) else {
        return false;
    };
    match current_origin(model, payload) {
        Some((source, index)) => {
            model.drag.resync_origin(source, index);
            true
        }
        None => {
            tracing::debug!(?payload, "dragged item disappeared, cancelling drag");
            model.drag.cancel();
            false
        }
    }
}

/// Apply a drop to the stores. Returns whether anything changed.
pub fn apply_drop_intent(model: &mut Workbench, intent: DropIntent) -> bool {
    match intent {
        DropIntent::Reorder { location, from, to } => {
            model.layout.reorder_within_location(location, from, to)
        }
        DropIntent::MoveToLocation {
            tool,
            location,
            index,
        } => move_tool(model, tool, location, Some(index)),
        DropIntent::ReorderSheet { from, to } => model.sheets.reorder(from, to),
    }
}
