//! Host composition tests: debounced saving, failure tolerance, viewport

mod common;

use std::time::{Duration, Instant};

use common::{failing_workbench, test_workbench};
use toolbench::commands::Cmd;
use toolbench::config::WorkbenchConfig;
use toolbench::layout::{LayoutPersistence, MemoryPersistence, SAVE_DEBOUNCE_MS};
use toolbench::messages::{AppMsg, LayoutMsg, Msg, SheetMsg};
use toolbench::model::Workbench;
use toolbench::tool::{ToolId, ToolLocation};
use toolbench::update::update;

fn move_to_sidebar(tool: ToolId) -> Msg {
    Msg::Layout(LayoutMsg::MoveTool {
        tool,
        location: ToolLocation::Sidebar,
        index: Some(0),
    })
}

// ============================================================================
// Debounced saving
// ============================================================================

#[test]
fn test_change_schedules_save_with_configured_delay() {
    let config = WorkbenchConfig {
        save_debounce_ms: 50,
        ..WorkbenchConfig::default()
    };
    let mut model = Workbench::new(config, Box::new(MemoryPersistence::new()));

    let cmd = update(&mut model, move_to_sidebar(ToolId::GrowthCurve));

    assert_eq!(cmd.and_then(|c| c.save_delay_ms()), Some(50));
    assert!(model.has_pending_save());
}

#[test]
fn test_tick_before_delay_does_not_save() {
    let mut model = test_workbench();
    update(&mut model, move_to_sidebar(ToolId::GrowthCurve));

    update(&mut model, Msg::App(AppMsg::Tick(Instant::now())));

    assert!(model.has_pending_save());
    assert!(model.persistence().load().is_none());
}

#[test]
fn test_tick_after_delay_saves_once() {
    let mut model = test_workbench();
    update(&mut model, move_to_sidebar(ToolId::GrowthCurve));
    update(&mut model, Msg::Layout(LayoutMsg::SetSidebarWidth(300.0)));

    let later = Instant::now() + Duration::from_millis(SAVE_DEBOUNCE_MS + 50);
    update(&mut model, Msg::App(AppMsg::Tick(later)));

    assert!(!model.has_pending_save());
    assert!(!model.layout.is_dirty());
    let saved = model.persistence().load().unwrap();
    assert_eq!(saved.sidebar_width, 300.0);
    assert_eq!(saved.sidebar.first().map(String::as_str), Some("growth-curve"));
}

#[test]
fn test_flush_saves_immediately() {
    let mut model = test_workbench();
    update(&mut model, move_to_sidebar(ToolId::ChartViewer));

    update(&mut model, Msg::App(AppMsg::Flush));

    assert!(!model.has_pending_save());
    let saved = model.persistence().load().unwrap();
    assert_eq!(saved.to_layout(), model.layout);
}

#[test]
fn test_flush_without_changes_writes_nothing() {
    let mut model = test_workbench();
    assert!(!model.flush());
    assert!(model.persistence().load().is_none());
}

#[test]
fn test_failed_save_is_swallowed() {
    let mut model = failing_workbench();
    update(&mut model, move_to_sidebar(ToolId::FormulaHelper));

    let later = Instant::now() + Duration::from_secs(5);
    let cmd = update(&mut model, Msg::App(AppMsg::Tick(later)));

    assert!(cmd.is_none());
    // The change stays in memory and is retried on the next flush
    assert_eq!(
        model.layout.location_of(ToolId::FormulaHelper),
        Some(ToolLocation::Sidebar)
    );
    assert!(model.layout.is_dirty());
    assert!(!model.flush());
}

#[test]
fn test_sheet_changes_do_not_schedule_saves() {
    let mut model = test_workbench();
    let cmd = update(&mut model, Msg::Sheet(SheetMsg::Add("Totals".into())));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.has_pending_save());
    assert_eq!(model.sheets.len(), 2);
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn test_resize_crossing_breakpoint_switches_presentation() {
    let mut model = test_workbench();
    assert!(!model.is_compact());

    let cmd = update(
        &mut model,
        Msg::App(AppMsg::Resize {
            width: 767.0,
            height: 1024.0,
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.is_compact());

    update(
        &mut model,
        Msg::App(AppMsg::Resize {
            width: 768.0,
            height: 1024.0,
        }),
    );
    assert!(!model.is_compact());
}

#[test]
fn test_same_size_resize_is_noop() {
    let mut model = test_workbench();
    let viewport = model.viewport;
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::Resize {
            width: viewport.width,
            height: viewport.height,
        }),
    );
    assert!(cmd.is_none());
}

#[test]
fn test_new_workbench_has_one_sheet() {
    let model = test_workbench();
    assert_eq!(model.sheets.len(), 1);
    assert_eq!(model.sheets.active(), model.sheets.ids().first().copied());
}
