use tracing::{debug, trace};

use crate::{
    lexer::{Command, Program},
    optimizer::{classify, LoopKind, Optimizations},
};

use super::{JumpTable, MalformedProgram, ResolvedProgram};

/// Match every bracket in a single left-to-right pass
pub fn resolve_jumps(program: &Program) -> Result<JumpTable, MalformedProgram> {
    let mut table = JumpTable::with_len(program.len());
    let mut open_brackets = vec![];

    for (index, command) in program.commands().iter().enumerate() {
        match command {
            Command::LoopStart => open_brackets.push(index),
            Command::LoopEnd => match open_brackets.pop() {
                Some(open) => table.pair(open, index),
                None => {
                    return Err(MalformedProgram::UnmatchedClose {
                        index,
                        position: program.position(index),
                    })
                }
            },
            _ => {}
        }
    }

    // report the outermost one, it's the one the reader will look for first
    if let Some(&index) = open_brackets.first() {
        return Err(MalformedProgram::UnmatchedOpen {
            index,
            position: program.position(index),
        });
    }

    Ok(table)
}

/// Resolve jumps and classify every loop once, for the program's lifetime
pub fn resolve(
    program: &Program,
    options: &Optimizations,
) -> Result<ResolvedProgram, MalformedProgram> {
    let jumps = resolve_jumps(program)?;
    let commands = program.commands();

    let mut loops = vec![None; program.len()];
    let (mut clear, mut multiply, mut generic) = (0usize, 0usize, 0usize);
    for (open, close) in jumps.pairs() {
        let kind = classify(&commands[open + 1..close], options);
        match kind {
            LoopKind::Clear => clear += 1,
            LoopKind::Multiply(_) => multiply += 1,
            LoopKind::Generic => generic += 1,
        }
        trace!(open, close, ?kind, "classified loop");
        loops[open] = Some(kind);
    }

    debug!(
        commands = program.len(),
        clear, multiply, generic, "resolved program"
    );

    Ok(ResolvedProgram {
        program: program.clone(),
        jumps,
        loops,
    })
}
