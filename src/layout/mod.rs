//! Layout store - where each tool lives and how the sidebar is sized
//!
//! ## Architecture
//!
//! - `LayoutState`: ordered tool lists per `ToolLocation` plus sidebar geometry
//! - `reorder_vec`: the shift-aware reorder shared with sheet tabs
//! - `LayoutPersistence`: load/save seam, with JSON file and in-memory backends
//! - `SaveDebouncer`: trailing debounce so saves follow bursts of changes

mod debounce;
mod persistence;
mod store;

pub use debounce::{SaveDebouncer, SAVE_DEBOUNCE_MS};
pub use persistence::{
    load_or_default, JsonFilePersistence, LayoutPersistence, MemoryPersistence, PersistedLayout,
};
pub use store::{
    reorder_vec, LayoutState, DEFAULT_SIDEBAR_WIDTH, DEFAULT_TOOLS_SECTION_HEIGHT,
    MAX_SIDEBAR_WIDTH, MAX_TOOLS_SECTION_HEIGHT, MIN_SIDEBAR_WIDTH, MIN_TOOLS_SECTION_HEIGHT,
};
