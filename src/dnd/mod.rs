//! Drag-and-drop reordering shared by the dock, sidebar tool list, and sheet tabs
//!
//! - `compute_insertion_index` / `compute_shift_offset`: pure layout math
//! - `DragEngine`: the single-session gesture state machine
//! - `resolve_drop`: final session state to `DropIntent`

mod engine;
mod reorder;

pub use engine::{
    resolve_drop, DragEngine, DragPayload, DragSession, DropContainer, DropIntent, PayloadKind,
};
pub use reorder::{compute_insertion_index, compute_shift_offset, ShiftState};
