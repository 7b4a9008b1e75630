//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! layout moves, panel stacking, and drag gestures.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=toolbench::dnd=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/toolbench/logs/toolbench.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Workbench;
use crate::tool::{ToolId, ToolLocation};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/toolbench/logs/toolbench.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "toolbench.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A host may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub sidebar: Vec<ToolId>,
    pub bottom_dock: Vec<ToolId>,
    pub floating: Vec<ToolId>,
    /// Open panels, bottom-most first
    pub stacking: Vec<ToolId>,
    pub dragging: bool,
}

impl LayoutSnapshot {
    pub fn from_workbench(model: &Workbench) -> Self {
        Self {
            sidebar: model.layout.tools_for(ToolLocation::Sidebar).to_vec(),
            bottom_dock: model.layout.tools_for(ToolLocation::BottomDock).to_vec(),
            floating: model.layout.tools_for(ToolLocation::Floating).to_vec(),
            stacking: model.panels.stacking_order(),
            dragging: model.drag.is_dragging(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        let lists = [
            ("sidebar", &self.sidebar, &other.sidebar),
            ("dock", &self.bottom_dock, &other.bottom_dock),
            ("floating", &self.floating, &other.floating),
            ("stack", &self.stacking, &other.stacking),
        ];
        for (name, before, after) in lists {
            if before != after {
                changes.push(format!(
                    "{}: [{}] → [{}]",
                    name,
                    join_ids(before),
                    join_ids(after)
                ));
            }
        }

        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn join_ids(ids: &[ToolId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
