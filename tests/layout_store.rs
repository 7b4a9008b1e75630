//! Tests for tool placement: moves, reorders, and sidebar sizing

mod common;

use common::{assert_layout_valid, layout_op, layout_with_dock, test_workbench, LayoutOp};
use proptest::prelude::*;
use toolbench::layout::{
    reorder_vec, LayoutState, DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH, MIN_TOOLS_SECTION_HEIGHT,
};
use toolbench::messages::{LayoutMsg, Msg};
use toolbench::tool::{ToolId, ToolLocation};
use toolbench::update::update;

use ToolId::*;

// ============================================================================
// Reorder
// ============================================================================

#[test]
fn test_drag_first_to_slot_three_lands_after_third() {
    let mut layout = layout_with_dock(&[Calculator, ComparisonChart, Simulation, GrowthCurve]);

    assert!(layout.reorder_within_location(ToolLocation::BottomDock, 0, 3));

    assert_eq!(
        layout.tools_for(ToolLocation::BottomDock),
        &[ComparisonChart, Simulation, Calculator, GrowthCurve]
    );
    assert_layout_valid(&layout);
}

#[test]
fn test_reorder_backward_inserts_before_target() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    assert!(reorder_vec(&mut items, 3, 1));
    assert_eq!(items, vec!['a', 'd', 'b', 'c']);
}

#[test]
fn test_reorder_to_own_slot_or_next_is_noop() {
    let mut items = vec!['a', 'b', 'c'];
    assert!(!reorder_vec(&mut items, 1, 1));
    assert!(!reorder_vec(&mut items, 1, 2));
    assert_eq!(items, vec!['a', 'b', 'c']);
}

#[test]
fn test_reorder_out_of_range_is_noop() {
    let mut layout = LayoutState::default();
    let before = layout.clone();
    assert!(!layout.reorder_within_location(ToolLocation::Sidebar, 42, 0));
    assert_eq!(layout, before);
    assert!(!layout.is_dirty());
}

#[test]
fn test_reorder_target_past_end_is_clamped() {
    let mut items = vec![1, 2, 3];
    assert!(reorder_vec(&mut items, 0, 99));
    assert_eq!(items, vec![2, 3, 1]);
}

#[test]
fn test_reorder_empty_floating_list_is_noop() {
    let mut layout = LayoutState::default();
    assert!(!layout.reorder_within_location(ToolLocation::Floating, 0, 0));
}

// ============================================================================
// Move between locations
// ============================================================================

#[test]
fn test_move_sidebar_tool_to_dock_front() {
    let mut layout = LayoutState::default();
    assert_eq!(layout.location_of(Simulation), Some(ToolLocation::Sidebar));

    assert!(layout.move_tool_to_location(Simulation, ToolLocation::BottomDock, Some(0)));

    assert!(!layout.tools_for(ToolLocation::Sidebar).contains(&Simulation));
    assert_eq!(layout.tools_for(ToolLocation::BottomDock)[0], Simulation);
    assert_eq!(layout.position_of(Simulation), Some((ToolLocation::BottomDock, 0)));
    assert!(layout.is_dirty());
    assert_layout_valid(&layout);
}

#[test]
fn test_move_without_index_appends() {
    let mut layout = LayoutState::default();
    layout.move_tool_to_location(Calculator, ToolLocation::BottomDock, None);
    assert_eq!(
        layout.tools_for(ToolLocation::BottomDock).last(),
        Some(&Calculator)
    );
}

#[test]
fn test_move_index_is_clamped_to_length() {
    let mut layout = LayoutState::default();
    layout.move_tool_to_location(GrowthCurve, ToolLocation::Floating, Some(50));
    assert_eq!(layout.tools_for(ToolLocation::Floating), &[GrowthCurve]);
}

#[test]
fn test_move_to_current_position_is_noop() {
    let mut layout = LayoutState::default();
    let (location, index) = layout.position_of(BalanceValidator).unwrap();

    assert!(!layout.move_tool_to_location(BalanceValidator, location, Some(index)));
    assert!(!layout.is_dirty());
}

#[test]
fn test_move_within_location_uses_post_removal_index() {
    let mut layout = layout_with_dock(&[Calculator, ComparisonChart, Simulation]);

    // Without Calculator the dock is [ComparisonChart, Simulation]; slot 1 is between them
    assert!(layout.move_tool_to_location(Calculator, ToolLocation::BottomDock, Some(1)));
    assert_eq!(
        layout.tools_for(ToolLocation::BottomDock),
        &[ComparisonChart, Calculator, Simulation]
    );
}

// ============================================================================
// Sidebar sizing
// ============================================================================

#[test]
fn test_sidebar_width_is_clamped() {
    let mut layout = LayoutState::default();
    assert_eq!(layout.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);

    layout.set_sidebar_width(10_000.0);
    assert_eq!(layout.sidebar_width(), MAX_SIDEBAR_WIDTH);

    layout.set_tools_section_height(-5.0);
    assert_eq!(layout.tools_section_height(), MIN_TOOLS_SECTION_HEIGHT);
}

#[test]
fn test_sidebar_width_nan_is_ignored() {
    let mut layout = LayoutState::default();
    assert!(!layout.set_sidebar_width(f32::NAN));
    assert_eq!(layout.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
}

// ============================================================================
// Repair on restore
// ============================================================================

#[test]
fn test_from_orders_drops_duplicates_and_restores_missing() {
    let layout = LayoutState::from_orders(
        vec![Calculator, Calculator, Simulation],
        vec![Simulation, GrowthCurve],
        vec![],
        256.0,
        200.0,
    );

    assert_layout_valid(&layout);
    assert_eq!(layout.location_of(Simulation), Some(ToolLocation::Sidebar));
    assert_eq!(
        layout.tools_for(ToolLocation::BottomDock).first(),
        Some(&GrowthCurve)
    );
    // ExportImport was missing and defaults to the sidebar
    assert_eq!(layout.location_of(ExportImport), Some(ToolLocation::Sidebar));
}

// ============================================================================
// Through update()
// ============================================================================

#[test]
fn test_update_move_into_floating_opens_panel() {
    let mut model = test_workbench();

    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::MoveTool {
            tool: DifficultyCurve,
            location: ToolLocation::Floating,
            index: None,
        }),
    );

    assert!(cmd.is_some_and(|c| c.needs_redraw()));
    assert_eq!(
        model.layout.location_of(DifficultyCurve),
        Some(ToolLocation::Floating)
    );
    assert!(model.panels.is_open(DifficultyCurve));
}

#[test]
fn test_update_move_out_of_floating_closes_panel() {
    let mut model = test_workbench();
    let to_floating = LayoutMsg::MoveTool {
        tool: ChartViewer,
        location: ToolLocation::Floating,
        index: None,
    };
    update(&mut model, Msg::Layout(to_floating));
    update(
        &mut model,
        Msg::Layout(LayoutMsg::MoveTool {
            tool: ChartViewer,
            location: ToolLocation::Sidebar,
            index: Some(0),
        }),
    );

    assert!(!model.panels.is_open(ChartViewer));
    assert_eq!(model.layout.tools_for(ToolLocation::Sidebar)[0], ChartViewer);
}

#[test]
fn test_update_noop_move_returns_no_command() {
    let mut model = test_workbench();
    let (location, index) = model.layout.position_of(Calculator).unwrap();
    let cmd = update(
        &mut model,
        Msg::Layout(LayoutMsg::MoveTool {
            tool: Calculator,
            location,
            index: Some(index),
        }),
    );
    assert!(cmd.is_none());
    assert!(!model.has_pending_save());
}

#[test]
fn test_update_reset_restores_defaults_and_closes_floating() {
    let mut model = test_workbench();
    update(
        &mut model,
        Msg::Layout(LayoutMsg::MoveTool {
            tool: FormulaHelper,
            location: ToolLocation::Floating,
            index: None,
        }),
    );
    update(&mut model, Msg::Layout(LayoutMsg::SetSidebarWidth(400.0)));

    update(&mut model, Msg::Layout(LayoutMsg::Reset));

    assert_eq!(model.layout, LayoutState::default());
    assert!(!model.panels.is_open(FormulaHelper));
}

// ============================================================================
// Generated edit sequences
// ============================================================================

proptest! {
    #[test]
    fn test_random_edits_keep_every_tool_placed_once(
        ops in prop::collection::vec(layout_op(), 0..200)
    ) {
        let mut layout = LayoutState::default();
        for op in &ops {
            match *op {
                LayoutOp::Move { tool, location, index } => {
                    layout.move_tool_to_location(tool, location, index);
                }
                LayoutOp::Reorder { location, from, to } => {
                    layout.reorder_within_location(location, from, to);
                }
            }
            prop_assert_eq!(layout.check_invariants(), Ok(()));
            prop_assert_eq!(layout.tool_count(), ToolId::ALL.len());
        }
    }

    #[test]
    fn test_random_edits_through_update_keep_floating_panels_open(
        ops in prop::collection::vec(layout_op(), 0..100)
    ) {
        let mut model = test_workbench();
        for op in &ops {
            update(&mut model, op.to_msg());
        }
        prop_assert_eq!(model.layout.tool_count(), ToolId::ALL.len());
        for tool in ToolId::ALL {
            let floating = model.layout.location_of(tool) == Some(ToolLocation::Floating);
            prop_assert_eq!(model.panels.is_open(tool), floating, "tool {}", tool);
        }
    }

    #[test]
    fn test_reorder_vec_only_permutes(
        len in 0usize..12,
        moves in prop::collection::vec((0usize..14, 0usize..14), 0..50)
    ) {
        let mut items: Vec<usize> = (0..len).collect();
        for (from, to) in moves {
            let before = items.clone();
            let changed = reorder_vec(&mut items, from, to);
            prop_assert_eq!(changed, items != before);

            let mut sorted = items.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        }
    }
}
