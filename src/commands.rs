//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Start (or restart) the save timer
    /// After delay_ms, the host sends Msg::App(AppMsg::Tick(now))
    ScheduleSave { delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScheduleSave { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Save delay requested by this command, if any
    pub fn save_delay_ms(&self) -> Option<u64> {
        match self {
            Cmd::ScheduleSave { delay_ms } => Some(*delay_ms),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.save_delay_ms()),
            Cmd::None | Cmd::Redraw => None,
        }
    }
}
