//! App update handlers
//!
//! Window size, gesture interruption, and debounced saving.

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::Workbench;
use crate::panel::Viewport;

/// Update function for app messages
pub fn update_app(model: &mut Workbench, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize { width, height } => {
            let viewport = Viewport::new(width.max(0.0), height.max(0.0));
            if viewport == model.viewport {
                return None;
            }
            let was_compact = model.is_compact();
            model.viewport = viewport;
            if was_compact != model.is_compact() {
                tracing::debug!(compact = model.is_compact(), "panel presentation changed");
            }
            Some(Cmd::Redraw)
        }

        // Focus loss and Escape both abandon whatever gesture is in flight
        AppMsg::WindowBlurred | AppMsg::EscapePressed => {
            let drag = model.drag.cancel();
            let panel = model.panels.cancel_interaction();
            (drag || panel).then_some(Cmd::Redraw)
        }

        AppMsg::Tick(now) => {
            model.flush_due(now);
            None
        }

        AppMsg::Flush => {
            model.flush();
            None
        }
    }
}
