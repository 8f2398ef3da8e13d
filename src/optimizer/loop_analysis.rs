use std::collections::BTreeMap;

use crate::lexer::Command;

use super::{LoopKind, MultiplyLoop, Optimization, Optimizations};

/// Classify the commands strictly between a matching `[` and `]`
pub fn classify(span: &[Command], options: &Optimizations) -> LoopKind {
    if options.contains(Optimization::ClearLoop) && is_clear(span) {
        return LoopKind::Clear;
    }

    if options.contains(Optimization::MultiplyLoop) {
        if let Some(multiply) = multiply_loop(span) {
            return LoopKind::Multiply(multiply);
        }
    }

    LoopKind::Generic
}

fn is_clear(span: &[Command]) -> bool {
    matches!(span, [Command::Increment] | [Command::Decrement])
}

fn multiply_loop(span: &[Command]) -> Option<MultiplyLoop> {
    let mut moves_right = false;
    let mut moves_left = false;

    let mut offset: isize = 0;
    let (mut min_offset, mut max_offset) = (0isize, 0isize);
    let mut deltas: BTreeMap<isize, i32> = BTreeMap::new();

    for command in span {
        match command {
            Command::MoveRight => {
                moves_right = true;
                offset += 1;
                max_offset = max_offset.max(offset);
            }
            Command::MoveLeft => {
                moves_left = true;
                offset -= 1;
                min_offset = min_offset.min(offset);
            }
            Command::Increment => *deltas.entry(offset).or_insert(0) += 1,
            Command::Decrement => *deltas.entry(offset).or_insert(0) -= 1,
            // I/O must happen once per iteration and nested loops depend on
            // cell values, neither can be folded
            Command::Write | Command::Read | Command::LoopStart | Command::LoopEnd => {
                return None
            }
        }
    }

    if !moves_right || !moves_left {
        return None;
    }

    // the loop has to come back to where it started and count the start down
    // by exactly one, otherwise the iteration count isn't the cell value
    if offset != 0 || deltas.remove(&0) != Some(-1) {
        return None;
    }

    Some(MultiplyLoop {
        deltas: deltas.into_iter().filter(|(_, delta)| *delta != 0).collect(),
        min_offset,
        max_offset,
    })
}
