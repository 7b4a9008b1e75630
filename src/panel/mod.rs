//! Floating tool panels
//!
//! ## Architecture
//!
//! - `PanelGeometryManager`: per-tool rectangle, z-order, open flags, and the
//!   drag-move / resize interaction state machine
//! - `render_panel`: pure mapping from panel state to a `PanelView`
//!   (floating chrome on desktop, full-viewport modal below the breakpoint)
//!
//! ## Integration
//!
//! - `Msg::Panel` dispatch in `update/panel.rs`
//! - Pointer routing via `PanelView::hit_test` in `pointer.rs`
//! - Geometry persisted alongside the layout in `layout::PersistedLayout`

mod geometry;
mod renderer;

pub use geometry::{
    EntryPoint, PanelGeometry, PanelGeometryManager, PanelInteraction, PanelPhase, ResizeEdge,
    BASE_Z_INDEX, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH,
};
pub use renderer::{
    render_panel, FloatingChrome, PanelHit, PanelProps, PanelView, Viewport, CLOSE_BUTTON_SIZE,
    HEADER_HEIGHT, MOBILE_BREAKPOINT, RESIZE_CORNER_SIZE, RESIZE_HANDLE_THICKNESS,
};
