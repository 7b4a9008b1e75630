//! Command-line argument parsing for the layout tool
//!
//! Supports:
//! - Printing the persisted layout
//! - Moving and reordering tools
//! - Sidebar sizing
//! - Resetting to defaults

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::messages::{LayoutMsg, Msg};
use crate::tool::{ToolId, ToolLocation};

/// Inspect and edit the persisted workbench layout
#[derive(Parser, Debug)]
#[command(
    name = "toolbench",
    version,
    about = "Inspect and edit the workbench tool layout"
)]
pub struct CliArgs {
    /// Layout file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub layout_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every location with its tools in order
    Show {
        /// Print the persisted JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Move a tool into a location
    Move {
        tool: ToolId,
        location: ToolLocation,
        /// Position in the target location (defaults to the end)
        #[arg(long, value_name = "N")]
        index: Option<usize>,
    },
    /// Reorder tools within one location
    Reorder {
        location: ToolLocation,
        from: usize,
        to: usize,
    },
    /// Set the sidebar width in pixels
    SidebarWidth { px: f32 },
    /// Set the tools section height in pixels
    SectionHeight { px: f32 },
    /// Put every tool back in its default location
    Reset,
}

impl CliArgs {
    /// The command to run; bare `toolbench` shows the layout
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show { json: false })
    }
}

impl Command {
    /// The update message this command performs, `None` for read-only commands
    pub fn to_msg(&self) -> Option<Msg> {
        let msg = match *self {
            Command::Show { .. } => return None,
            Command::Move {
                tool,
                location,
                index,
            } => LayoutMsg::MoveTool {
                tool,
                location,
                index,
            },
            Command::Reorder { location, from, to } => LayoutMsg::Reorder { location, from, to },
            Command::SidebarWidth { px } => LayoutMsg::SetSidebarWidth(px),
            Command::SectionHeight { px } => LayoutMsg::SetToolsSectionHeight(px),
            Command::Reset => LayoutMsg::Reset,
        };
        Some(Msg::Layout(msg))
    }
}
