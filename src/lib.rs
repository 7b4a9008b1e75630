//! Toolbench - draggable multi-panel tool layout
//!
//! This crate provides the layout core of the workbench: which tools live in
//! the sidebar, bottom dock or floating, where floating panels sit, and the
//! drag-and-drop engine that moves tools between them. It follows the Elm
//! Architecture pattern; rendering is expressed as data, never pixels.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dnd;
pub mod geometry;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod pointer;
pub mod sheets;
pub mod tool;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkbenchConfig;
pub use messages::Msg;
pub use model::Workbench;
pub use tool::{ToolId, ToolLocation};
