use crate::lexer::Command;

/// Cells shown around the pointer in every [`Step`]
pub const WINDOW_LEN: usize = 10;

/// Snapshot taken after a command has executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: Command,
    /// Index of the command that just ran
    pub pc: usize,
    pub pointer: usize,
    /// Generic loops currently entered
    pub loop_depth: usize,
    /// Tape index of `window[0]`
    pub window_start: usize,
    pub window: Vec<u8>,
}

/// Receives a [`Step`] after every executed command.
///
/// Observers only ever see shared snapshots, they can't touch the engine.
/// A loop folded into one update is reported as a single `[` step.
pub trait StepObserver {
    fn on_step(&mut self, step: &Step);
}

impl<F: FnMut(&Step)> StepObserver for F {
    fn on_step(&mut self, step: &Step) {
        self(step)
    }
}
