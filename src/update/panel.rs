//! Panel update handlers
//!
//! Handles panel open/close, stacking, and move/resize gestures.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::Workbench;
use crate::panel::EntryPoint;
use crate::tool::ToolId;

use super::persisted_change;

/// Update function for panel messages
pub fn update_panel(model: &mut Workbench, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Open { tool, entry } => open_panel(model, tool, entry),

        PanelMsg::Close(tool) => {
            if model.panels.close(tool) {
                persisted_change(model)
            } else {
                None
            }
        }

        PanelMsg::Toggle { tool, entry } => {
            if !model.panels.is_open(tool) {
                open_panel(model, tool, entry)
            } else if model.panels.close(tool) {
                persisted_change(model)
            } else {
                None
            }
        }

        PanelMsg::Focus(tool) => {
            if model.panels.bring_to_front(tool) {
                persisted_change(model)
            } else {
                None
            }
        }

        PanelMsg::BeginMove { tool, pointer } => {
            // One gesture at a time across panels and drag-and-drop
            if model.drag.is_dragging() {
                return None;
            }
            model
                .panels
                .begin_drag(tool, pointer)
                .then_some(Cmd::Redraw)
        }

        PanelMsg::BeginResize {
            tool,
            edge,
            pointer,
        } => {
            if model.drag.is_dragging() {
                return None;
            }
            model
                .panels
                .begin_resize(tool, edge, pointer)
                .then_some(Cmd::Redraw)
        }

        PanelMsg::PointerMove(pointer) => {
            let moved = model.panels.update_drag(pointer) || model.panels.update_resize(pointer);
            moved.then_some(Cmd::Redraw)
        }

        PanelMsg::PointerUp => {
            if model.panels.end_interaction() {
                persisted_change(model)
            } else {
                None
            }
        }

        PanelMsg::Reset(tool) => {
            model.panels.reset(tool);
            persisted_change(model)
        }
    }
}

/// Open (or raise) a panel; saves only when its state actually changed
fn open_panel(model: &mut Workbench, tool: ToolId, entry: EntryPoint) -> Option<Cmd> {
    let was_open = model.panels.is_open(tool);
    let before = model.panels.geometry(tool).copied();
    let after = model.panels.open_from(tool, entry);
    if was_open && before == Some(after) {
        None
    } else {
        persisted_change(model)
    }
}
