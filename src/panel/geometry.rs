//! Floating panel geometry - position, size, stacking, drag-move and resize
//!
//! Per-panel state machine:
//!
//! ```text
//! closed ──open──▶ open ──begin_drag──▶ dragging ──end──▶ open ──close──▶ closed
//!                   │                                     ▲
//!                   └──begin_resize──▶ resizing ──end─────┘
//! ```
//!
//! At most one panel is dragging or resizing at a time. Closing keeps the
//! geometry so re-opening restores the last position.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::tool::ToolId;

pub const MIN_PANEL_WIDTH: f32 = 280.0;
pub const MIN_PANEL_HEIGHT: f32 = 200.0;

/// z-index given to the first panel opened when nothing else is open
pub const BASE_Z_INDEX: u32 = 30;

/// Position, size and stacking order of one floating panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub z_index: u32,
}

impl PanelGeometry {
    pub fn from_rect(rect: Rect, z_index: u32) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            z_index,
        }
    }

    /// Default geometry for a tool, unstacked
    pub fn default_for(tool: ToolId) -> Self {
        Self::from_rect(tool.default_geometry(), 0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Which edge or corner of a panel is being dragged to resize it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 3] = [ResizeEdge::East, ResizeEdge::South, ResizeEdge::SouthEast];

    pub fn resizes_width(&self) -> bool {
        matches!(self, ResizeEdge::East | ResizeEdge::SouthEast)
    }

    pub fn resizes_height(&self) -> bool {
        matches!(self, ResizeEdge::South | ResizeEdge::SouthEast)
    }
}

/// Where a panel was opened from
///
/// Opening from a different entry point than last time starts the panel at
/// its default geometry again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Sidebar,
    Dock,
    Floating,
    Shortcut,
}

/// In-flight pointer interaction with a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelInteraction {
    Dragging {
        tool: ToolId,
        pointer_start: Point,
        origin: PanelGeometry,
    },
    Resizing {
        tool: ToolId,
        edge: ResizeEdge,
        pointer_start: Point,
        origin: PanelGeometry,
    },
}

impl PanelInteraction {
    pub fn tool(&self) -> ToolId {
        match self {
            PanelInteraction::Dragging { tool, .. } | PanelInteraction::Resizing { tool, .. } => {
                *tool
            }
        }
    }

    fn origin(&self) -> PanelGeometry {
        match self {
            PanelInteraction::Dragging { origin, .. }
            | PanelInteraction::Resizing { origin, .. } => *origin,
        }
    }
}

/// Observable state of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Open,
    Dragging,
    Resizing,
}

/// Geometry and open/stacking state for all floating panels
#[derive(Debug, Clone, Default)]
pub struct PanelGeometryManager {
    geometries: BTreeMap<ToolId, PanelGeometry>,
    open: BTreeSet<ToolId>,
    entry_points: BTreeMap<ToolId, EntryPoint>,
    interaction: Option<PanelInteraction>,
    dirty: bool,
}

impl PanelGeometryManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn geometry(&self, tool: ToolId) -> Option<&PanelGeometry> {
        self.geometries.get(&tool)
    }

    /// All known geometries, open or not
    pub fn geometries(&self) -> impl Iterator<Item = (ToolId, &PanelGeometry)> + '_ {
        self.geometries.iter().map(|(tool, geometry)| (*tool, geometry))
    }

    pub fn is_open(&self, tool: ToolId) -> bool {
        self.open.contains(&tool)
    }

    /// Open panels sorted bottom-most first
    pub fn stacking_order(&self) -> Vec<ToolId> {
        let mut tools: Vec<ToolId> = self.open.iter().copied().collect();
        tools.sort_by_key(|tool| self.geometries.get(tool).map_or(0, |g| g.z_index));
        tools
    }

    /// Open panel with the highest z-index
    pub fn topmost(&self) -> Option<ToolId> {
        self.stacking_order().last().copied()
    }

    pub fn interaction(&self) -> Option<&PanelInteraction> {
        self.interaction.as_ref()
    }

    pub fn phase(&self, tool: ToolId) -> PanelPhase {
        match self.interaction {
            Some(PanelInteraction::Dragging { tool: t, .. }) if t == tool => PanelPhase::Dragging,
            Some(PanelInteraction::Resizing { tool: t, .. }) if t == tool => PanelPhase::Resizing,
            _ if self.is_open(tool) => PanelPhase::Open,
            _ => PanelPhase::Closed,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn max_open_z(&self, except: Option<ToolId>) -> Option<u32> {
        self.open
            .iter()
            .filter(|tool| Some(**tool) != except)
            .filter_map(|tool| self.geometries.get(tool))
            .map(|g| g.z_index)
            .max()
    }

    // ------------------------------------------------------------------
    // Open / close / stacking
    // ------------------------------------------------------------------

    /// Open a panel on top of every other open panel
    ///
    /// Seeds geometry from the tool's default the first time. Opening an
    /// already-open panel just brings it to the front.
    pub fn open(&mut self, tool: ToolId) -> PanelGeometry {
        if self.is_open(tool) {
            self.bring_to_front(tool);
        } else {
            let z_index = self
                .max_open_z(None)
                .map_or(BASE_Z_INDEX, |max| max + 1);
            let geometry = self
                .geometries
                .entry(tool)
                .or_insert_with(|| PanelGeometry::default_for(tool));
            geometry.z_index = z_index;
            self.open.insert(tool);
            self.dirty = true;
            tracing::debug!(tool = %tool, z_index, "opened panel");
        }
        self.geometries[&tool]
    }

    /// Open a panel, resetting its geometry when the entry point changed
    pub fn open_from(&mut self, tool: ToolId, entry: EntryPoint) -> PanelGeometry {
        let previous = self.entry_points.insert(tool, entry);
        if previous.is_some_and(|prev| prev != entry) && self.geometries.contains_key(&tool) {
            self.reset(tool);
        }
        self.open(tool)
    }

    /// Close a panel, keeping its geometry for the next open
    pub fn close(&mut self, tool: ToolId) -> bool {
        if self.interaction.is_some_and(|i| i.tool() == tool) {
            self.interaction = None;
        }
        let closed = self.open.remove(&tool);
        if closed {
            tracing::debug!(tool = %tool, "closed panel");
        }
        closed
    }

    /// Raise a panel above every other open panel
    pub fn bring_to_front(&mut self, tool: ToolId) -> bool {
        if !self.is_open(tool) {
            return false;
        }
        let Some(max) = self.max_open_z(Some(tool)) else {
            // Alone on screen, already on top
            return false;
        };
        let Some(geometry) = self.geometries.get_mut(&tool) else {
            return false;
        };
        if geometry.z_index > max {
            return false;
        }
        geometry.z_index = max.max(geometry.z_index) + 1;
        self.dirty = true;
        true
    }

    /// Restore a tool's default geometry, keeping its place in the stack
    pub fn reset(&mut self, tool: ToolId) {
        let z_index = self.geometries.get(&tool).map_or(0, |g| g.z_index);
        self.geometries
            .insert(tool, PanelGeometry::from_rect(tool.default_geometry(), z_index));
        if self.interaction.is_some_and(|i| i.tool() == tool) {
            self.interaction = None;
        }
        self.dirty = true;
        tracing::debug!(tool = %tool, "reset panel geometry");
    }

    /// Seed geometry from persisted state without opening the panel
    pub fn restore_geometry(&mut self, tool: ToolId, geometry: PanelGeometry) {
        let mut geometry = geometry;
        if !(geometry.x.is_finite() && geometry.y.is_finite()) {
            let default = tool.default_geometry();
            geometry.x = default.x;
            geometry.y = default.y;
        }
        geometry.width = floor_dimension(geometry.width, MIN_PANEL_WIDTH);
        geometry.height = floor_dimension(geometry.height, MIN_PANEL_HEIGHT);
        self.geometries.insert(tool, geometry);
    }

    // ------------------------------------------------------------------
    // Drag-move
    // ------------------------------------------------------------------

    /// Start moving an open panel; ignored while another interaction runs
    pub fn begin_drag(&mut self, tool: ToolId, pointer: Point) -> bool {
        if self.interaction.is_some() || !self.is_open(tool) {
            return false;
        }
        self.bring_to_front(tool);
        let origin = self.geometries[&tool];
        self.interaction = Some(PanelInteraction::Dragging {
            tool,
            pointer_start: pointer,
            origin,
        });
        true
    }

    /// Translate the dragged panel by the pointer delta since drag start
    ///
    /// Panels are not clamped to the viewport and may be moved partly
    /// off-screen.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        let Some(PanelInteraction::Dragging {
            tool,
            pointer_start,
            origin,
        }) = self.interaction
        else {
            return false;
        };
        let Some(geometry) = self.geometries.get_mut(&tool) else {
            return false;
        };
        geometry.x = origin.x + (pointer.x - pointer_start.x);
        geometry.y = origin.y + (pointer.y - pointer_start.y);
        self.dirty = true;
        true
    }

    pub fn end_drag(&mut self) -> bool {
        if matches!(self.interaction, Some(PanelInteraction::Dragging { .. })) {
            self.interaction = None;
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Start resizing an open panel from `edge`
    pub fn begin_resize(&mut self, tool: ToolId, edge: ResizeEdge, pointer: Point) -> bool {
        if self.interaction.is_some() || !self.is_open(tool) {
            return false;
        }
        self.bring_to_front(tool);
        let origin = self.geometries[&tool];
        self.interaction = Some(PanelInteraction::Resizing {
            tool,
            edge,
            pointer_start: pointer,
            origin,
        });
        true
    }

    /// Resize from the grabbed edge, never below the minimum size
    pub fn update_resize(&mut self, pointer: Point) -> bool {
        let Some(PanelInteraction::Resizing {
            tool,
            edge,
            pointer_start,
            origin,
        }) = self.interaction
        else {
            return false;
        };
        let Some(geometry) = self.geometries.get_mut(&tool) else {
            return false;
        };
        if edge.resizes_width() {
            geometry.width = (origin.width + pointer.x - pointer_start.x).max(MIN_PANEL_WIDTH);
        }
        if edge.resizes_height() {
            geometry.height = (origin.height + pointer.y - pointer_start.y).max(MIN_PANEL_HEIGHT);
        }
        self.dirty = true;
        true
    }

    pub fn end_resize(&mut self) -> bool {
        if matches!(self.interaction, Some(PanelInteraction::Resizing { .. })) {
            self.interaction = None;
            true
        } else {
            false
        }
    }

    /// Pointer released: finish whichever interaction is running
    pub fn end_interaction(&mut self) -> bool {
        self.interaction.take().is_some()
    }

    /// Abort the running interaction and put the panel back where it started
    pub fn cancel_interaction(&mut self) -> bool {
        let Some(interaction) = self.interaction.take() else {
            return false;
        };
        let tool = interaction.tool();
        if let Some(geometry) = self.geometries.get_mut(&tool) {
            let z_index = geometry.z_index;
            *geometry = PanelGeometry {
                z_index,
                ..interaction.origin()
            };
        }
        tracing::debug!(tool = %tool, "cancelled panel interaction");
        true
    }
}

fn floor_dimension(value: f32, min: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}
