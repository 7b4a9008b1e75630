//! Layout store - tool locations, ordering, and sidebar geometry
//!
//! The location of a tool is derived from which order list contains it, so
//! "every tool has exactly one location" reduces to "every tool appears in
//! exactly one list". All mutations keep that invariant.

use crate::tool::{ToolId, ToolLocation};

pub const DEFAULT_SIDEBAR_WIDTH: f32 = 256.0;
pub const MIN_SIDEBAR_WIDTH: f32 = 180.0;
pub const MAX_SIDEBAR_WIDTH: f32 = 480.0;

pub const DEFAULT_TOOLS_SECTION_HEIGHT: f32 = 200.0;
pub const MIN_TOOLS_SECTION_HEIGHT: f32 = 100.0;
pub const MAX_TOOLS_SECTION_HEIGHT: f32 = 600.0;

/// Move the element at `from` so it lands at `to`, with `to` interpreted
/// against the list after removal.
///
/// Dragging past siblings means the drop slot index counts the dragged item
/// itself; when moving forward the effective target is therefore `to - 1`.
/// Returns whether the list changed.
pub fn reorder_vec<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len());
    let target = if from < to { to - 1 } else { to };
    if target == from {
        return false;
    }
    let item = items.remove(from);
    items.insert(target, item);
    true
}

/// Complete tool layout state
#[derive(Debug, Clone)]
pub struct LayoutState {
    sidebar: Vec<ToolId>,
    bottom_dock: Vec<ToolId>,
    floating: Vec<ToolId>,
    sidebar_width: f32,
    tools_section_height: f32,
    dirty: bool,
}

impl PartialEq for LayoutState {
    /// Dirty tracking is bookkeeping, not layout
    fn eq(&self, other: &Self) -> bool {
        self.sidebar == other.sidebar
            && self.bottom_dock == other.bottom_dock
            && self.floating == other.floating
            && self.sidebar_width == other.sidebar_width
            && self.tools_section_height == other.tools_section_height
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        let mut state = Self {
            sidebar: Vec::new(),
            bottom_dock: Vec::new(),
            floating: Vec::new(),
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            tools_section_height: DEFAULT_TOOLS_SECTION_HEIGHT,
            dirty: false,
        };
        for tool in ToolId::ALL {
            state.list_mut(tool.default_location()).push(tool);
        }
        state
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from possibly inconsistent order lists
    ///
    /// Duplicates are dropped (first occurrence wins, in sidebar, dock,
    /// floating order), tools missing from every list are appended to their
    /// default location, and geometry is clamped.
    pub fn from_orders(
        sidebar: Vec<ToolId>,
        bottom_dock: Vec<ToolId>,
        floating: Vec<ToolId>,
        sidebar_width: f32,
        tools_section_height: f32,
    ) -> Self {
        let mut seen = Vec::with_capacity(ToolId::ALL.len());
        let mut dedup = |list: Vec<ToolId>| -> Vec<ToolId> {
            list.into_iter()
                .filter(|tool| {
                    if seen.contains(tool) {
                        tracing::debug!(tool = %tool, "dropping duplicate tool from layout");
                        false
                    } else {
                        seen.push(*tool);
                        true
                    }
                })
                .collect()
        };

        let sidebar = dedup(sidebar);
        let bottom_dock = dedup(bottom_dock);
        let floating = dedup(floating);

        let mut state = Self {
            sidebar,
            bottom_dock,
            floating,
            sidebar_width: clamp_dimension(
                sidebar_width,
                MIN_SIDEBAR_WIDTH,
                MAX_SIDEBAR_WIDTH,
                DEFAULT_SIDEBAR_WIDTH,
            ),
            tools_section_height: clamp_dimension(
                tools_section_height,
                MIN_TOOLS_SECTION_HEIGHT,
                MAX_TOOLS_SECTION_HEIGHT,
                DEFAULT_TOOLS_SECTION_HEIGHT,
            ),
            dirty: false,
        };

        for tool in ToolId::ALL {
            if state.position_of(tool).is_none() {
                tracing::debug!(tool = %tool, "restoring missing tool to its default location");
                state.list_mut(tool.default_location()).push(tool);
            }
        }
        state
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Ordered tools for a location
    pub fn tools_for(&self, location: ToolLocation) -> &[ToolId] {
        match location {
            ToolLocation::Sidebar => &self.sidebar,
            ToolLocation::BottomDock => &self.bottom_dock,
            ToolLocation::Floating => &self.floating,
        }
    }

    /// Current location of a tool
    pub fn location_of(&self, tool: ToolId) -> Option<ToolLocation> {
        self.position_of(tool).map(|(location, _)| location)
    }

    /// Location and index of a tool within that location
    pub fn position_of(&self, tool: ToolId) -> Option<(ToolLocation, usize)> {
        ToolLocation::ALL.into_iter().find_map(|location| {
            self.tools_for(location)
                .iter()
                .position(|t| *t == tool)
                .map(|index| (location, index))
        })
    }

    /// Total number of tools across all locations
    pub fn tool_count(&self) -> usize {
        self.sidebar.len() + self.bottom_dock.len() + self.floating.len()
    }

    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    pub fn tools_section_height(&self) -> f32 {
        self.tools_section_height
    }

    /// Whether the state changed since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Move a tool to `location`, inserting at `index` (clamped, default end)
    ///
    /// For a move within the tool's current location the index is interpreted
    /// against the list with the tool already removed. Moving a tool to the
    /// location and index it already occupies is a no-op.
    ///
    /// Returns whether anything changed.
    pub fn move_tool_to_location(
        &mut self,
        tool: ToolId,
        location: ToolLocation,
        index: Option<usize>,
    ) -> bool {
        let Some((from_location, from_index)) = self.position_of(tool) else {
            report_missing_tool(tool);
            return false;
        };

        if from_location == location {
            let last = self.tools_for(location).len() - 1;
            let target = index.unwrap_or(last).min(last);
            if target == from_index {
                return false;
            }
            let list = self.list_mut(location);
            list.remove(from_index);
            list.insert(target, tool);
        } else {
            self.list_mut(from_location).remove(from_index);
            let list = self.list_mut(location);
            let target = index.unwrap_or(list.len()).min(list.len());
            list.insert(target, tool);
        }

        tracing::debug!(
            tool = %tool,
            from = %from_location,
            to = %location,
            "moved tool"
        );
        self.dirty = true;
        true
    }

    /// Shift-aware reorder within one location, see [`reorder_vec`]
    pub fn reorder_within_location(
        &mut self,
        location: ToolLocation,
        from_index: usize,
        to_index: usize,
    ) -> bool {
        let changed = reorder_vec(self.list_mut(location), from_index, to_index);
        if changed {
            tracing::debug!(
                location = %location,
                from = from_index,
                to = to_index,
                "reordered tools"
            );
            self.dirty = true;
        }
        changed
    }

    /// Set sidebar width, clamped to its bounds
    pub fn set_sidebar_width(&mut self, width: f32) -> bool {
        let width = clamp_dimension(
            width,
            MIN_SIDEBAR_WIDTH,
            MAX_SIDEBAR_WIDTH,
            self.sidebar_width,
        );
        if width == self.sidebar_width {
            return false;
        }
        self.sidebar_width = width;
        self.dirty = true;
        true
    }

    /// Set the height of the sidebar tools section, clamped to its bounds
    pub fn set_tools_section_height(&mut self, height: f32) -> bool {
        let height = clamp_dimension(
            height,
            MIN_TOOLS_SECTION_HEIGHT,
            MAX_TOOLS_SECTION_HEIGHT,
            self.tools_section_height,
        );
        if height == self.tools_section_height {
            return false;
        }
        self.tools_section_height = height;
        self.dirty = true;
        true
    }

    /// Put every tool back in its default location and restore default sizes
    pub fn reset_to_defaults(&mut self) {
        let defaults = Self::default();
        if *self != defaults {
            *self = defaults;
            self.dirty = true;
        }
    }

    // ------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------

    /// Check that every tool appears in exactly one location
    pub fn check_invariants(&self) -> Result<(), String> {
        for tool in ToolId::ALL {
            let count = ToolLocation::ALL
                .into_iter()
                .map(|loc| self.tools_for(loc).iter().filter(|t| **t == tool).count())
                .sum::<usize>();
            if count != 1 {
                return Err(format!("tool {} appears {} times in layout", tool, count));
            }
        }
        if self.tool_count() != ToolId::ALL.len() {
            return Err(format!(
                "layout holds {} tools, expected {}",
                self.tool_count(),
                ToolId::ALL.len()
            ));
        }
        Ok(())
    }

    /// Panic in debug builds if invariants are violated, log in release
    pub fn assert_invariants(&self, context: &str) {
        if let Err(e) = self.check_invariants() {
            tracing::error!(%context, "layout invariant violated: {}", e);
            debug_assert!(false, "layout invariant violated after {}: {}", context, e);
        }
    }

    fn list_mut(&mut self, location: ToolLocation) -> &mut Vec<ToolId> {
        match location {
            ToolLocation::Sidebar => &mut self.sidebar,
            ToolLocation::BottomDock => &mut self.bottom_dock,
            ToolLocation::Floating => &mut self.floating,
        }
    }
}

/// Clamp a persisted dimension, substituting `fallback` for non-finite input
fn clamp_dimension(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// A tool missing from every list is a programmer error
fn report_missing_tool(tool: ToolId) {
    tracing::error!(tool = %tool, "tool is not present in any location");
    debug_assert!(false, "tool {} is not present in any location", tool);
}
