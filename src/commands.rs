//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them against the rendering surface and the host
//! callback; none of them feed back into `update`.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render every slot from the current model
    Render,
    /// Move native keyboard focus to this slot
    Focus(usize),
    /// Invoke the host callback with the joined code
    NotifyChange { code: String },
    /// Tell the surface to suppress its native field behavior
    PreventDefault,
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine an optional command with effects that follow it
    ///
    /// Returns `None` when there is nothing to do.
    pub fn merge(first: Option<Cmd>, rest: Vec<Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = first.into_iter().filter(|c| !c.is_none()).collect();
        cmds.extend(rest.into_iter().filter(|c| !c.is_none()));
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Check if this command does nothing
    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(|c| c.is_none()),
            _ => false,
        }
    }

    /// Check if this command requires a re-render
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::Render => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_render()),
            _ => false,
        }
    }

    /// Check if the surface's native handling must be suppressed
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.prevents_default()),
            _ => false,
        }
    }

    /// The slot this command moves focus to, if any (last one wins)
    pub fn focus_target(&self) -> Option<usize> {
        match self {
            Cmd::Focus(index) => Some(*index),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.focus_target()),
            _ => None,
        }
    }
}
