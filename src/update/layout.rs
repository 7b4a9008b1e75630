//! Layout update handlers
//!
//! Handles tool moves, reorders, and sidebar sizing.

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::Workbench;
use crate::panel::EntryPoint;
use crate::tool::{ToolId, ToolLocation};

use super::persisted_change;

/// Update function for layout messages
pub fn update_layout(model: &mut Workbench, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::MoveTool {
            tool,
            location,
            index,
        } => {
            if move_tool(model, tool, location, index) {
                persisted_change(model)
            } else {
                None
            }
        }

        LayoutMsg::Reorder { location, from, to } => {
            if model.layout.reorder_within_location(location, from, to) {
                persisted_change(model)
            } else {
                None
            }
        }

        LayoutMsg::SetSidebarWidth(width) => {
            if model.layout.set_sidebar_width(width) {
                persisted_change(model)
            } else {
                None
            }
        }

        LayoutMsg::SetToolsSectionHeight(height) => {
            if model.layout.set_tools_section_height(height) {
                persisted_change(model)
            } else {
                None
            }
        }

        LayoutMsg::Reset => {
            // Floating launchers go away on reset, and so do their panels
            let floating = model.layout.tools_for(ToolLocation::Floating).to_vec();
            model.layout.reset_to_defaults();
            for tool in floating {
                model.panels.close(tool);
            }
            if model.layout.is_dirty() {
                persisted_change(model)
            } else {
                Some(Cmd::Redraw)
            }
        }
    }
}

/// Move a tool and keep its panel in step with the floating location
///
/// A tool moved into `Floating` gets its panel opened; a tool moved out of
/// `Floating` gets it closed.
pub(crate) fn move_tool(
    model: &mut Workbench,
    tool: ToolId,
    location: ToolLocation,
    index: Option<usize>,
) -> bool {
    let previous = model.layout.location_of(tool);
    if !model.layout.move_tool_to_location(tool, location, index) {
        return false;
    }

    match (previous, location) {
        (Some(ToolLocation::Floating), ToolLocation::Floating) => {}
        (_, ToolLocation::Floating) => {
            model.panels.open_from(tool, EntryPoint::Floating);
        }
        (Some(ToolLocation::Floating), _) => {
            model.panels.close(tool);
        }
        _ => {}
    }
    true
}
