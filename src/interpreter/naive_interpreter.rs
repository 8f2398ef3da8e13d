use crate::{
    lexer::{Command, Program},
    resolver::{resolve_jumps, MalformedProgram},
};

use super::{tape::Tape, Runtime};

/// Interprets every command as written and finds matching brackets by
/// scanning for them on every jump. Slow, but obviously correct.
pub struct NaiveInterpreter {
    runtime: Runtime,
}

impl NaiveInterpreter {
    pub fn new(tape_size: usize) -> Self {
        Self {
            runtime: Runtime::new(tape_size),
        }
    }

    /// Every run starts from a zeroed tape of the configured size
    pub fn run(&mut self, program: &Program, input: &str) -> Result<String, MalformedProgram> {
        // only used to reject malformed programs the same way the engine does
        resolve_jumps(program)?;

        let commands = program.commands();
        let runtime = &mut self.runtime;
        runtime.reset();
        runtime.set_input(input);

        let mut pc = 0;
        while pc < commands.len() {
            match commands[pc] {
                Command::MoveRight => runtime.shift_right(),
                Command::MoveLeft => runtime.shift_left(),
                Command::Increment => runtime.deref_increment(),
                Command::Decrement => runtime.deref_decrement(),
                Command::Write => runtime.write(),
                Command::Read => runtime.read(),
                Command::LoopStart => {
                    if runtime.value_is_zero() {
                        pc = scan_forward(commands, pc);
                    }
                }
                Command::LoopEnd => {
                    if !runtime.value_is_zero() {
                        pc = scan_backward(commands, pc);
                    }
                }
            }
            pc += 1;
        }

        Ok(runtime.output().to_string())
    }

    pub fn tape(&self) -> &Tape {
        self.runtime.tape()
    }
}

fn scan_forward(commands: &[Command], open: usize) -> usize {
    let mut depth = 0usize;
    for (index, command) in commands.iter().enumerate().skip(open) {
        match command {
            Command::LoopStart => depth += 1,
            Command::LoopEnd => {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
            _ => {}
        }
    }
    commands.len()
}

fn scan_backward(commands: &[Command], close: usize) -> usize {
    let mut depth = 0usize;
    for (index, command) in commands[..=close].iter().enumerate().rev() {
        match command {
            Command::LoopEnd => depth += 1,
            Command::LoopStart => {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
            _ => {}
        }
    }
    close
}
