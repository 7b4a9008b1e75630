//! Drag session state machine
//!
//! ```text
//! Idle ──begin──▶ Dragging ──release──▶ Idle  (intent emitted, or nothing)
//!                    │
//!                    └──cancel / blur / escape──▶ Idle (no mutation)
//! ```
//!
//! Only one session exists at a time; `begin` while dragging is rejected.
//! The engine never mutates layout itself: a drop resolves to a
//! `DropIntent` that the host applies to the stores.

use crate::geometry::{Axis, Point, Rect};
use crate::sheets::SheetId;
use crate::tool::{ToolId, ToolLocation};

use super::reorder::{compute_insertion_index, compute_shift_offset, ShiftState};

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    Tool(ToolId),
    SheetTab(SheetId),
}

/// Capability marker attached at drag start, checked by drop targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Tool,
    SheetTab,
}

impl DragPayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            DragPayload::Tool(_) => PayloadKind::Tool,
            DragPayload::SheetTab(_) => PayloadKind::SheetTab,
        }
    }
}

/// A linear container that items can be dragged within or into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropContainer {
    Tools(ToolLocation),
    SheetTabs,
}

impl DropContainer {
    /// Whether this container takes payloads of `kind`
    pub fn accepts(&self, kind: PayloadKind) -> bool {
        matches!(
            (self, kind),
            (DropContainer::Tools(_), PayloadKind::Tool)
                | (DropContainer::SheetTabs, PayloadKind::SheetTab)
        )
    }

    pub fn axis(&self) -> Axis {
        match self {
            DropContainer::Tools(location) => location.axis(),
            DropContainer::SheetTabs => Axis::Horizontal,
        }
    }
}

/// Transient state of one drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub payload: DragPayload,
    /// Container the item was picked up from
    pub source: DropContainer,
    /// Index of the item within `source` at drag start
    pub origin_index: usize,
    /// Accepting container currently under the pointer
    pub over: Option<DropContainer>,
    /// Insertion index within `over`
    pub insertion_index: Option<usize>,
    /// Last absolute pointer position
    pub pointer: Point,
}

impl DragSession {
    /// Shift inputs for items of `container`
    pub fn shift_state(&self, container: DropContainer, item_size: f32) -> ShiftState {
        let over_this = self.over == Some(container);
        ShiftState {
            origin: (self.source == container).then_some(self.origin_index),
            insertion: if over_this { self.insertion_index } else { None },
            item_size,
        }
    }
}

/// Mutation a completed drop asks the host to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    /// Shift-aware reorder within one tool location
    Reorder {
        location: ToolLocation,
        from: usize,
        to: usize,
    },
    /// Move a tool into another location
    MoveToLocation {
        tool: ToolId,
        location: ToolLocation,
        index: usize,
    },
    /// Shift-aware reorder of sheet tabs
    ReorderSheet { from: usize, to: usize },
}

/// Turn the final state of a session into an intent
///
/// `None` when the pointer is not over an accepting container or when the
/// item would land exactly where it started.
pub fn resolve_drop(session: &DragSession) -> Option<DropIntent> {
    let target = session.over?;
    let insertion = session.insertion_index?;
    if !target.accepts(session.payload.kind()) {
        return None;
    }

    let origin = session.origin_index;
    let unchanged =
        session.source == target && (insertion == origin || insertion == origin + 1);
    if unchanged {
        tracing::trace!("drop onto own position ignored");
        return None;
    }

    match (session.payload, session.source, target) {
        (DragPayload::Tool(_), DropContainer::Tools(from), DropContainer::Tools(to))
            if from == to =>
        {
            Some(DropIntent::Reorder {
                location: to,
                from: origin,
                to: insertion,
            })
        }
        (DragPayload::Tool(tool), _, DropContainer::Tools(location)) => {
            Some(DropIntent::MoveToLocation {
                tool,
                location,
                index: insertion,
            })
        }
        (DragPayload::SheetTab(_), DropContainer::SheetTabs, DropContainer::SheetTabs) => {
            Some(DropIntent::ReorderSheet {
                from: origin,
                to: insertion,
            })
        }
        _ => None,
    }
}

/// Owner of the single active drag session
#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    session: Option<DragSession>,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a gesture; rejected while another session is active
    pub fn begin(
        &mut self,
        payload: DragPayload,
        source: DropContainer,
        origin_index: usize,
        pointer: Point,
    ) -> bool {
        if self.session.is_some() {
            tracing::debug!(?payload, "ignoring drag start while a drag is in progress");
            return false;
        }
        if !source.accepts(payload.kind()) {
            tracing::debug!(?payload, ?source, "payload does not belong to its source");
            return false;
        }
        self.session = Some(DragSession {
            payload,
            source,
            origin_index,
            over: None,
            insertion_index: None,
            pointer,
        });
        true
    }

    /// Pointer moved over `container` whose items occupy `item_rects`
    ///
    /// The insertion index is recomputed from scratch on every call. Returns
    /// the new index, or `None` when the container refuses the payload.
    pub fn hover(
        &mut self,
        container: DropContainer,
        pointer: Point,
        item_rects: &[Rect],
    ) -> Option<usize> {
        let session = self.session.as_mut()?;
        session.pointer = pointer;
        if !container.accepts(session.payload.kind()) {
            session.over = None;
            session.insertion_index = None;
            return None;
        }
        let index = compute_insertion_index(pointer, item_rects, container.axis());
        session.over = Some(container);
        session.insertion_index = Some(index);
        Some(index)
    }

    /// Pointer left `container`
    pub fn leave(&mut self, container: DropContainer) {
        if let Some(session) = self.session.as_mut() {
            if session.over == Some(container) {
                session.over = None;
                session.insertion_index = None;
            }
        }
    }

    /// Visual offset for an item of `container` during the current drag
    pub fn shift_offset(
        &self,
        container: DropContainer,
        item_index: usize,
        item_size: f32,
    ) -> f32 {
        self.session.as_ref().map_or(0.0, |session| {
            compute_shift_offset(item_index, &session.shift_state(container, item_size))
        })
    }

    /// Offsets for every item of `container`, each shifted by its own extent
    pub fn shift_offsets(&self, container: DropContainer, item_rects: &[Rect]) -> Vec<f32> {
        let axis = container.axis();
        item_rects
            .iter()
            .enumerate()
            .map(|(index, rect)| self.shift_offset(container, index, rect.extent(axis)))
            .collect()
    }

    /// Point the session at where its payload sits now
    ///
    /// Layout or sheet changes during a gesture can move the dragged item;
    /// the host calls this before resolving so the drop moves the right one.
    pub fn resync_origin(&mut self, source: DropContainer, origin_index: usize) {
        if let Some(session) = self.session.as_mut() {
            if (session.source, session.origin_index) != (source, origin_index) {
                tracing::debug!(
                    payload = ?session.payload,
                    ?source,
                    origin_index,
                    "drag origin moved during gesture"
                );
                session.source = source;
                session.origin_index = origin_index;
            }
        }
    }

    /// Pointer released: end the session and resolve its intent
    pub fn release(&mut self) -> Option<DropIntent> {
        let session = self.session.take()?;
        let intent = resolve_drop(&session);
        tracing::debug!(payload = ?session.payload, ?intent, "drag ended");
        intent
    }

    /// Discard the session without any mutation
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.session.take().is_some();
        if cancelled {
            tracing::debug!("drag cancelled");
        }
        cancelled
    }
}
