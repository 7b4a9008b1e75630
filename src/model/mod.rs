//! Application model - the complete state of the workbench layout
//!
//! `Workbench` composes the layout store, panel geometry, drag engine and
//! sheet tabs, and owns the injected persistence backend. Views read it
//! between updates, so every message is observed as a whole.

use std::time::{Duration, Instant};

use crate::config::WorkbenchConfig;
use crate::dnd::DragEngine;
use crate::geometry::Point;
use crate::layout::{
    load_or_default, LayoutPersistence, LayoutState, MemoryPersistence, PersistedLayout,
    SaveDebouncer,
};
use crate::panel::{
    render_panel, EntryPoint, PanelGeometryManager, PanelHit, PanelProps, PanelView, Viewport,
};
use crate::sheets::SheetTabs;
use crate::tool::{ToolId, ToolLocation};

/// The complete workbench model
#[derive(Debug)]
pub struct Workbench {
    /// Tool locations and sidebar sizing
    pub layout: LayoutState,
    /// Floating panel geometry, stacking and open flags
    pub panels: PanelGeometryManager,
    /// Active drag-and-drop gesture, if any
    pub drag: DragEngine,
    /// Sheet tabs above the grid
    pub sheets: SheetTabs,
    /// Window size
    pub viewport: Viewport,
    pub config: WorkbenchConfig,
    persistence: Box<dyn LayoutPersistence>,
    saver: SaveDebouncer,
}

impl Workbench {
    /// Create a workbench, restoring layout from `persistence` when possible
    pub fn new(config: WorkbenchConfig, persistence: Box<dyn LayoutPersistence>) -> Self {
        let (layout, mut panels) = load_or_default(persistence.as_ref());
        // Floating tools have no launcher, so their panels come back open
        for tool in layout.tools_for(ToolLocation::Floating) {
            panels.open_from(*tool, EntryPoint::Floating);
        }
        panels.mark_clean();
        let saver = SaveDebouncer::new(config.save_debounce());

        let mut sheets = SheetTabs::new();
        sheets.add("Sheet 1");

        Self {
            layout,
            panels,
            drag: DragEngine::new(),
            sheets,
            viewport: Viewport::default(),
            config,
            persistence,
            saver,
        }
    }

    /// Workbench backed by in-memory persistence with default config
    pub fn in_memory() -> Self {
        Self::new(WorkbenchConfig::default(), Box::new(MemoryPersistence::new()))
    }

    pub fn persistence(&self) -> &dyn LayoutPersistence {
        self.persistence.as_ref()
    }

    /// Serializable snapshot of layout and panel geometry
    pub fn snapshot(&self) -> PersistedLayout {
        PersistedLayout::capture(&self.layout, &self.panels)
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    pub fn save_delay(&self) -> Duration {
        self.saver.delay()
    }

    /// Record a persisted-state change, restarting the save timer
    pub fn note_layout_changed(&mut self, now: Instant) {
        self.saver.touch(now);
    }

    pub fn has_pending_save(&self) -> bool {
        self.saver.is_pending()
    }

    /// Save if the debounce period has elapsed at `now`
    pub fn flush_due(&mut self, now: Instant) -> bool {
        if self.saver.take_due(now) {
            self.persist_now()
        } else {
            false
        }
    }

    /// Save any pending or unsaved change immediately
    pub fn flush(&mut self) -> bool {
        let pending = self.saver.take_pending();
        if pending || self.layout.is_dirty() || self.panels.is_dirty() {
            self.persist_now()
        } else {
            false
        }
    }

    /// Write the current snapshot; failures are logged and swallowed
    pub fn persist_now(&mut self) -> bool {
        let snapshot = self.snapshot();
        match self.persistence.save(&snapshot) {
            Ok(()) => {
                self.layout.mark_clean();
                self.panels.mark_clean();
                true
            }
            Err(e) => {
                tracing::warn!("Failed to save layout: {}", e);
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Whether panels render as full-screen modals at the current size
    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact(self.config.mobile_breakpoint)
    }

    /// View for one panel, `None` when closed
    pub fn panel_view(&self, tool: ToolId) -> Option<PanelView> {
        let geometry = self.panels.geometry(tool)?;
        render_panel(
            PanelProps {
                tool,
                geometry,
                open: self.panels.is_open(tool),
                title: tool.meta().label_key,
            },
            self.viewport,
            self.config.mobile_breakpoint,
        )
    }

    /// Views for every open panel, bottom-most first
    pub fn panel_views(&self) -> Vec<PanelView> {
        self.panels
            .stacking_order()
            .into_iter()
            .filter_map(|tool| self.panel_view(tool))
            .collect()
    }

    /// Topmost panel part under `point`
    pub fn panel_at(&self, point: Point) -> Option<(ToolId, PanelHit)> {
        self.panel_views()
            .iter()
            .rev()
            .find_map(|view| view.hit_test(point).map(|hit| (view.tool(), hit)))
    }
}
