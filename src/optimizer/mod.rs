use std::collections::HashSet;

pub mod loop_analysis;

pub use loop_analysis::classify;

/// Loop idioms that may be replaced with a closed-form tape update
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Optimization {
    /// `[-]` / `[+]`: zero the current cell
    ClearLoop,
    /// `[->++>+<<]` and friends: distribute a multiple of the current cell
    MultiplyLoop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimizations(HashSet<Optimization>);

impl Optimizations {
    pub fn all() -> Self {
        Self(HashSet::from([
            Optimization::ClearLoop,
            Optimization::MultiplyLoop,
        ]))
    }

    /// Every loop is interpreted as written
    pub fn none() -> Self {
        Self(HashSet::new())
    }

    pub fn with(mut self, optimization: Optimization) -> Self {
        self.0.insert(optimization);
        self
    }

    pub fn contains(&self, optimization: Optimization) -> bool {
        self.0.contains(&optimization)
    }
}

impl Default for Optimizations {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Optimization> for Optimizations {
    fn from_iter<T: IntoIterator<Item = Optimization>>(iter: T) -> Self {
        Self(HashSet::from_iter(iter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopKind {
    Clear,
    Multiply(MultiplyLoop),
    Generic,
}

/// Static summary of one iteration of a multiply loop.
///
/// Running the loop with `v` in the current cell adds `v * delta` to the
/// cell at every recorded offset and leaves the current cell at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyLoop {
    /// `(offset, delta)` sorted by offset, never offset 0, never a zero delta
    pub deltas: Vec<(isize, i32)>,
    /// Leftmost offset the body visits
    pub min_offset: isize,
    /// Rightmost offset the body visits
    pub max_offset: isize,
}
