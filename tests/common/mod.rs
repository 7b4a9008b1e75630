//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use proptest::prelude::*;
use toolbench::config::WorkbenchConfig;
use toolbench::geometry::{Axis, Rect};
use toolbench::layout::{
    LayoutState, MemoryPersistence, MAX_SIDEBAR_WIDTH, MAX_TOOLS_SECTION_HEIGHT,
    MIN_SIDEBAR_WIDTH, MIN_TOOLS_SECTION_HEIGHT,
};
use toolbench::messages::{LayoutMsg, Msg};
use toolbench::model::Workbench;
use toolbench::panel::{PanelGeometry, PanelGeometryManager, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};
use toolbench::tool::{ToolId, ToolLocation};

/// Workbench with default layout and in-memory persistence
pub fn test_workbench() -> Workbench {
    Workbench::in_memory()
}

/// Workbench restored from raw stored layout text
pub fn workbench_from_json(json: &str) -> Workbench {
    Workbench::new(
        WorkbenchConfig::default(),
        Box::new(MemoryPersistence::with_contents(json)),
    )
}

/// Workbench whose every save fails
pub fn failing_workbench() -> Workbench {
    Workbench::new(WorkbenchConfig::default(), Box::new(MemoryPersistence::failing()))
}

/// Layout with the bottom dock set to exactly `dock`; everything else in the sidebar
pub fn layout_with_dock(dock: &[ToolId]) -> LayoutState {
    let sidebar = ToolId::ALL
        .into_iter()
        .filter(|tool| !dock.contains(tool))
        .collect();
    LayoutState::from_orders(sidebar, dock.to_vec(), Vec::new(), 256.0, 200.0)
}

/// Item rects laid out edge to edge along `axis`, each `size` long
pub fn item_rects(count: usize, size: f32, axis: Axis) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let offset = i as f32 * size;
            match axis {
                Axis::Horizontal => Rect::new(offset, 0.0, size, 40.0),
                Axis::Vertical => Rect::new(0.0, offset, 200.0, size),
            }
        })
        .collect()
}

/// Assert the layout still holds every tool exactly once
pub fn assert_layout_valid(layout: &LayoutState) {
    if let Err(e) = layout.check_invariants() {
        panic!("layout invariant violated: {e}");
    }
    let total: usize = ToolLocation::ALL
        .into_iter()
        .map(|location| layout.tools_for(location).len())
        .sum();
    assert_eq!(total, ToolId::ALL.len());
}

// ============================================================================
// Property-test strategies
// ============================================================================

pub fn any_tool() -> impl Strategy<Value = ToolId> {
    prop::sample::select(ToolId::ALL.to_vec())
}

pub fn any_location() -> impl Strategy<Value = ToolLocation> {
    prop::sample::select(ToolLocation::ALL.to_vec())
}

/// One user-level layout edit; indices deliberately run past list ends
#[derive(Debug, Clone)]
pub enum LayoutOp {
    Move {
        tool: ToolId,
        location: ToolLocation,
        index: Option<usize>,
    },
    Reorder {
        location: ToolLocation,
        from: usize,
        to: usize,
    },
}

impl LayoutOp {
    pub fn to_msg(&self) -> Msg {
        match *self {
            LayoutOp::Move {
                tool,
                location,
                index,
            } => Msg::Layout(LayoutMsg::MoveTool {
                tool,
                location,
                index,
            }),
            LayoutOp::Reorder { location, from, to } => {
                Msg::Layout(LayoutMsg::Reorder { location, from, to })
            }
        }
    }
}

pub fn layout_op() -> impl Strategy<Value = LayoutOp> {
    let max = ToolId::ALL.len() + 2;
    prop_oneof![
        (any_tool(), any_location(), prop::option::of(0..max)).prop_map(
            |(tool, location, index)| LayoutOp::Move {
                tool,
                location,
                index
            }
        ),
        (any_location(), 0..max, 0..max)
            .prop_map(|(location, from, to)| LayoutOp::Reorder { location, from, to }),
    ]
}

/// Any valid layout: every tool placed once, sizes within bounds
///
/// Sizes are whole pixels so they survive the JSON text exactly.
pub fn any_layout() -> impl Strategy<Value = LayoutState> {
    let count = ToolId::ALL.len();
    (
        Just(ToolId::ALL.to_vec()).prop_shuffle(),
        0..=count,
        0..=count,
        MIN_SIDEBAR_WIDTH as u16..=MAX_SIDEBAR_WIDTH as u16,
        MIN_TOOLS_SECTION_HEIGHT as u16..=MAX_TOOLS_SECTION_HEIGHT as u16,
    )
        .prop_map(|(tools, a, b, width, height)| {
            let (first, second) = (a.min(b), a.max(b));
            LayoutState::from_orders(
                tools[..first].to_vec(),
                tools[first..second].to_vec(),
                tools[second..].to_vec(),
                f32::from(width),
                f32::from(height),
            )
        })
}

/// Panel geometry at or above the minimum size
pub fn any_panel_geometry() -> impl Strategy<Value = PanelGeometry> {
    (
        -2000i16..2000,
        -2000i16..2000,
        MIN_PANEL_WIDTH as u16..2000,
        MIN_PANEL_HEIGHT as u16..2000,
        0u32..100,
    )
        .prop_map(|(x, y, width, height, z_index)| PanelGeometry {
            x: f32::from(x),
            y: f32::from(y),
            width: f32::from(width),
            height: f32::from(height),
            z_index,
        })
}

/// A geometry store seeded with remembered geometry for some tools
pub fn any_panels() -> impl Strategy<Value = PanelGeometryManager> {
    prop::collection::btree_map(any_tool(), any_panel_geometry(), 0..=ToolId::ALL.len()).prop_map(
        |geometries| {
            let mut panels = PanelGeometryManager::new();
            for (tool, geometry) in geometries {
                panels.restore_geometry(tool, geometry);
            }
            panels
        },
    )
}
