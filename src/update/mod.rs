//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drag;
mod layout;
mod panel;
mod sheets;

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Workbench;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use drag::{apply_drop_intent, update_drag};
pub use layout::update_layout;
pub use panel::update_panel;
pub use sheets::update_sheets;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut Workbench, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut Workbench, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Sheet(m) => sheets::update_sheets(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Result of a change to persisted state: redraw and restart the save timer
pub(crate) fn persisted_change(model: &mut Workbench) -> Option<Cmd> {
    model.note_layout_changed(Instant::now());
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::ScheduleSave {
            delay_ms: model.save_delay().as_millis() as u64,
        },
    ]))
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs diffs, and checks store
/// invariants. Pointer-move noise is not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut Workbench, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, DragMsg, PanelMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Panel(PanelMsg::PointerMove(_))
            | Msg::Drag(DragMsg::Hover { .. })
            | Msg::App(AppMsg::Tick(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_workbench(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_workbench(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.layout.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Layout::Reorder { location: BottomDock, from: 0, to: 3 }`
/// - `Panel::Focus(Calculator)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Sheet(m) => format!("Sheet::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
