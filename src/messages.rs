//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::dnd::{DragPayload, DropContainer};
use crate::geometry::{Point, Rect};
use crate::panel::{EntryPoint, ResizeEdge};
use crate::sheets::SheetId;
use crate::tool::{ToolId, ToolLocation};

/// Tool placement messages (move, reorder, sidebar sizing)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Move a tool into a location; `index` defaults to the end
    MoveTool {
        tool: ToolId,
        location: ToolLocation,
        index: Option<usize>,
    },
    /// Shift-aware reorder within one location
    Reorder {
        location: ToolLocation,
        from: usize,
        to: usize,
    },
    /// Sidebar splitter dragged
    SetSidebarWidth(f32),
    /// Tools section splitter dragged
    SetToolsSectionHeight(f32),
    /// Put every tool back in its default location
    Reset,
}

/// Floating panel messages
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Open a tool's panel from a launcher
    Open { tool: ToolId, entry: EntryPoint },
    /// Close a panel (geometry is kept)
    Close(ToolId),
    /// Open if closed, close if open
    Toggle { tool: ToolId, entry: EntryPoint },
    /// Panel clicked: raise it above the others
    Focus(ToolId),
    /// Pointer pressed on a panel header
    BeginMove { tool: ToolId, pointer: Point },
    /// Pointer pressed on a resize handle
    BeginResize {
        tool: ToolId,
        edge: ResizeEdge,
        pointer: Point,
    },
    /// Pointer moved during a move or resize
    PointerMove(Point),
    /// Pointer released, ending a move or resize
    PointerUp,
    /// Restore a panel's default geometry
    Reset(ToolId),
}

/// Drag-and-drop reordering messages
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// Item picked up from `source` at `origin_index`
    Start {
        payload: DragPayload,
        source: DropContainer,
        origin_index: usize,
        pointer: Point,
    },
    /// Pointer over `container`, whose items currently occupy `item_rects`
    Hover {
        container: DropContainer,
        pointer: Point,
        item_rects: Vec<Rect>,
    },
    /// Pointer left `container`
    Leave(DropContainer),
    /// Pointer released
    Release,
    /// Gesture aborted
    Cancel,
}

/// Sheet tab messages
#[derive(Debug, Clone, PartialEq)]
pub enum SheetMsg {
    Add(String),
    Remove(SheetId),
    Select(SheetId),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize { width: f32, height: f32 },
    /// Window lost focus; any gesture in flight is cancelled
    WindowBlurred,
    /// Escape pressed; any gesture in flight is cancelled
    EscapePressed,
    /// Timer tick used to flush debounced saves
    Tick(Instant),
    /// Write pending layout changes immediately (e.g. before exit)
    Flush,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Layout(LayoutMsg),
    Panel(PanelMsg),
    Drag(DragMsg),
    Sheet(SheetMsg),
    App(AppMsg),
}
