pub mod resolver;

use thiserror::Error;

use crate::{
    lexer::{Position, Program},
    optimizer::LoopKind,
};

pub use resolver::{resolve, resolve_jumps};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedProgram {
    #[error("Can't find matching `]` for `[` at line {}, column {}", .position.line, .position.column)]
    UnmatchedOpen { index: usize, position: Position },

    #[error("Can't find matching `[` for `]` at line {}, column {}", .position.line, .position.column)]
    UnmatchedClose { index: usize, position: Position },
}

impl MalformedProgram {
    /// Index of the offending bracket in the filtered program
    pub fn index(&self) -> usize {
        match self {
            MalformedProgram::UnmatchedOpen { index, .. }
            | MalformedProgram::UnmatchedClose { index, .. } => *index,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            MalformedProgram::UnmatchedOpen { position, .. }
            | MalformedProgram::UnmatchedClose { position, .. } => *position,
        }
    }
}

/// Maps every bracket to its partner, both directions.
/// Non-bracket indices have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    partners: Vec<Option<usize>>,
}

impl JumpTable {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            partners: vec![None; len],
        }
    }

    pub(crate) fn pair(&mut self, open: usize, close: usize) {
        self.partners[open] = Some(close);
        self.partners[close] = Some(open);
    }

    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    /// All `(open, close)` pairs in order of their `[`
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(index, partner)| match partner {
                Some(close) if *close > index => Some((index, *close)),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.partners.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A program together with everything precomputed about it at load time
#[derive(Debug, Clone)]
pub struct ResolvedProgram {
    program: Program,
    jumps: JumpTable,
    /// Indexed by the position of each `[`, `None` everywhere else
    loops: Vec<Option<LoopKind>>,
}

impl ResolvedProgram {
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn jumps(&self) -> &JumpTable {
        &self.jumps
    }

    pub fn loop_kind(&self, open: usize) -> Option<&LoopKind> {
        self.loops.get(open).and_then(|kind| kind.as_ref())
    }

    pub fn len(&self) -> usize {
        self.program.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    /// Partner of the bracket at `pc`.
    ///
    /// Resolution pairs every bracket, so only a non-bracket `pc` can miss.
    #[inline]
    pub(crate) fn jump(&self, pc: usize) -> usize {
        match self.jumps.partner(pc) {
            Some(target) => target,
            None => panic!("No matching bracket for command {pc}, it isn't a bracket"),
        }
    }
}
