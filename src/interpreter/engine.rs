use tracing::debug;

use crate::{
    lexer::{tokenize, Command},
    optimizer::{LoopKind, MultiplyLoop, Optimizations},
    resolver::{resolve, MalformedProgram, ResolvedProgram},
};

use super::{
    observer::{Step, StepObserver, WINDOW_LEN},
    tape::Tape,
    Runtime,
};

pub const DEFAULT_TAPE_SIZE: usize = 30_000;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cells allocated up front, the tape still grows past them
    pub tape_size: usize,
    /// Only consulted when the engine resolves the source itself
    pub optimizations: Optimizations,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            optimizations: Optimizations::all(),
        }
    }
}

#[derive(Debug, Clone)]
struct ExecutionState {
    pc: usize,
    runtime: Runtime,
    /// `[` of every generic loop we are inside of
    loop_stack: Vec<usize>,
    steps: u64,
}

impl ExecutionState {
    fn new(tape_size: usize) -> Self {
        Self {
            pc: 0,
            runtime: Runtime::new(tape_size),
            loop_stack: vec![],
            steps: 0,
        }
    }
}

/// Runs a resolved program using its jump table and loop classifications
pub struct Engine {
    program: ResolvedProgram,
    config: EngineConfig,
    state: ExecutionState,
}

impl Engine {
    pub fn new(program: ResolvedProgram, config: EngineConfig) -> Self {
        let state = ExecutionState::new(config.tape_size);
        Self {
            program,
            config,
            state,
        }
    }

    /// Tokenize and resolve `source`, failing before anything runs
    pub fn from_source(source: &str, config: EngineConfig) -> Result<Self, MalformedProgram> {
        let program = resolve(&tokenize(source), &config.optimizations)?;
        Ok(Self::new(program, config))
    }

    /// Execute until the program ends and return everything written so far.
    ///
    /// Once the program has ended, running again does nothing until
    /// [`Engine::reset`] is called.
    pub fn run(&mut self, input: &str) -> String {
        self.execute(input, None)
    }

    pub fn run_observed(&mut self, input: &str, observer: &mut dyn StepObserver) -> String {
        self.execute(input, Some(observer))
    }

    /// Throw away all execution state in one go
    pub fn reset(&mut self) {
        self.state = ExecutionState::new(self.config.tape_size);
    }

    pub fn program(&self) -> &ResolvedProgram {
        &self.program
    }

    pub fn tape(&self) -> &Tape {
        self.state.runtime.tape()
    }

    pub fn output(&self) -> &str {
        self.state.runtime.output()
    }

    pub fn pc(&self) -> usize {
        self.state.pc
    }

    pub fn loop_depth(&self) -> usize {
        self.state.loop_stack.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state.pc >= self.program.len()
    }

    fn execute(&mut self, input: &str, mut observer: Option<&mut dyn StepObserver>) -> String {
        self.state.runtime.set_input(input);
        debug!(
            pc = self.state.pc,
            commands = self.program.len(),
            "starting run"
        );

        while self.state.pc < self.program.len() {
            let pc = self.state.pc;
            let command = self.program.program().commands()[pc];
            self.step(pc, command);
            self.state.steps += 1;

            if let Some(observer) = observer.as_deref_mut() {
                observer.on_step(&self.snapshot(pc, command));
            }

            // always step past whatever we landed on, jumps included
            self.state.pc += 1;
        }

        debug!(
            steps = self.state.steps,
            output_len = self.state.runtime.output().len(),
            tape_len = self.state.runtime.tape().len(),
            "finished run"
        );
        self.state.runtime.output().to_string()
    }

    #[inline]
    fn step(&mut self, pc: usize, command: Command) {
        let program = &self.program;
        let state = &mut self.state;
        let runtime = &mut state.runtime;

        match command {
            Command::MoveRight => runtime.shift_right(),
            Command::MoveLeft => runtime.shift_left(),
            Command::Increment => runtime.deref_increment(),
            Command::Decrement => runtime.deref_decrement(),
            Command::Write => runtime.write(),
            Command::Read => runtime.read(),
            Command::LoopStart => {
                if runtime.value_is_zero() {
                    state.pc = program.jump(pc);
                    return;
                }

                match program.loop_kind(pc) {
                    Some(LoopKind::Clear) => {
                        runtime.tape_mut().set(0);
                        state.pc = program.jump(pc);
                    }
                    Some(LoopKind::Multiply(multiply)) => {
                        apply_multiply(runtime.tape_mut(), multiply);
                        state.pc = program.jump(pc);
                    }
                    Some(LoopKind::Generic) | None => state.loop_stack.push(pc),
                }
            }
            Command::LoopEnd => {
                if !runtime.value_is_zero() {
                    state.pc = program.jump(pc);
                } else {
                    let open = state.loop_stack.pop();
                    debug_assert_eq!(open, Some(program.jump(pc)));
                }
            }
        }
    }

    fn snapshot(&self, pc: usize, command: Command) -> Step {
        let tape = self.state.runtime.tape();
        let window_start = tape.pointer().saturating_sub(WINDOW_LEN / 2);
        Step {
            command,
            pc,
            pointer: tape.pointer(),
            loop_depth: self.state.loop_stack.len(),
            window_start,
            window: tape.window(window_start, WINDOW_LEN),
        }
    }
}

/// Everything the loop would do over `value` iterations, in one pass
fn apply_multiply(tape: &mut Tape, multiply: &MultiplyLoop) {
    let value = tape.get();

    // the body walks this far every iteration, so the tape must too
    tape.ensure_offset(multiply.min_offset);
    tape.ensure_offset(multiply.max_offset);

    for &(offset, delta) in multiply.deltas.iter() {
        let factor = delta.rem_euclid(256) as u8;
        tape.add_at_offset(offset, value.wrapping_mul(factor));
    }
    tape.set(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(source: &str) -> Engine {
        Engine::from_source(source, EngineConfig::default()).unwrap()
    }

    #[test]
    fn adds_and_prints() {
        assert_eq!(engine("++.").run(""), "\u{2}");
    }

    #[test]
    fn clear_loop_runs_in_one_step() {
        let mut engine = engine("+[-]");
        let mut steps = vec![];
        let output = engine.run_observed("", &mut |step: &Step| steps.push(step.clone()));
        assert_eq!(output, "");
        assert_eq!(engine.tape().get(), 0);
        // `+` then the folded `[`
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].command, Command::LoopStart);
        assert_eq!(steps[1].window[0], 0);
    }

    #[test]
    fn clear_loop_on_any_value() {
        let mut engine = engine("-[+]>+++[-]<.>.");
        assert_eq!(engine.run(""), "\0\0");
    }

    #[test]
    fn multiply_loop_wraps() {
        // 200 * 3 = 600 = 88 (mod 256)
        let source = format!("{}[->+++<]>.", "+".repeat(200));
        assert_eq!(engine(&source).run(""), "\u{58}");
    }

    #[test]
    fn multiply_loop_with_negative_delta() {
        // cell1 = 10 - 2*3
        let source = ">++++++++++<+++[->--<]>.";
        assert_eq!(engine(source).run(""), "\u{4}");
    }

    #[test]
    fn multiply_loop_grows_tape_to_the_left() {
        let mut engine = engine("++[-<+++>]<.");
        assert_eq!(engine.run(""), "\u{6}");
        assert_eq!(engine.tape().len(), DEFAULT_TAPE_SIZE + 1);
        assert_eq!(engine.tape().pointer(), 0);
    }

    #[test]
    fn multiply_loop_grows_tape_to_the_right() {
        let config = EngineConfig {
            tape_size: 1,
            ..EngineConfig::default()
        };
        let mut engine = Engine::from_source("+[->>>+<<<]>>>.", config).unwrap();
        assert_eq!(engine.run(""), "\u{1}");
        assert_eq!(engine.tape().len(), 4);
    }

    #[test]
    fn generic_loops_use_the_stack() {
        let mut engine = engine("++[>+.<-]");
        let mut depths = vec![];
        engine.run_observed("", &mut |step: &Step| depths.push(step.loop_depth));
        assert_eq!(engine.output(), "\u{1}\u{2}");
        assert_eq!(engine.loop_depth(), 0);
        assert_eq!(depths.iter().max(), Some(&1));
        assert_eq!(depths.last(), Some(&0));
    }

    #[test]
    fn nested_generic_loops() {
        // the outer loop nests another one so it can't be folded
        let mut engine = engine("+++[>++++[>+<-]<-]>>.");
        assert_eq!(engine.run(""), "\u{c}");
    }

    #[test]
    fn reads_input_then_zero() {
        assert_eq!(engine(",.").run("A"), "A");
        assert_eq!(engine(",.").run(""), "\0");
        assert_eq!(engine(",.,.,.").run("hi"), "hi\0");
    }

    #[test]
    fn io_inside_multiply_shaped_loop_still_happens() {
        assert_eq!(engine("+++[->+<.]").run(""), "\u{2}\u{1}\0");
    }

    #[test]
    fn running_a_finished_engine_does_nothing() {
        let mut engine = engine("+.");
        assert_eq!(engine.run(""), "\u{1}");
        assert!(engine.is_finished());
        assert_eq!(engine.run(""), "\u{1}");
    }

    #[test]
    fn reset_restores_everything() {
        let config = EngineConfig {
            tape_size: 3,
            ..EngineConfig::default()
        };
        let mut engine = Engine::from_source("<<+>>>>>,.", config).unwrap();
        assert_eq!(engine.run("x"), "x");
        assert_eq!(engine.tape().len(), 6);

        engine.reset();
        assert_eq!(engine.pc(), 0);
        assert_eq!(engine.output(), "");
        assert_eq!(engine.tape(), &Tape::new(3));
        assert_eq!(engine.run("y"), "y");
    }

    #[test]
    fn observer_sees_every_command() {
        let mut engine = engine(">+<-");
        let mut seen = vec![];
        engine.run_observed("", &mut |step: &Step| {
            seen.push((step.command.as_char(), step.pc, step.pointer))
        });
        assert_eq!(seen, vec![('>', 0, 1), ('+', 1, 1), ('<', 2, 0), ('-', 3, 0)]);
    }

    #[test]
    fn observer_window_is_bounded() {
        let mut engine = engine(&">".repeat(20));
        let mut windows = vec![];
        engine.run_observed("", &mut |step: &Step| {
            windows.push((step.window_start, step.window.len()))
        });
        assert!(windows.iter().all(|(_, len)| *len <= WINDOW_LEN));
        assert_eq!(windows.last(), Some(&(15, WINDOW_LEN)));
    }

    #[test]
    fn observed_and_plain_runs_agree() {
        let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
        let plain = engine(source).run("");
        let mut count = 0;
        let observed = engine(source).run_observed("", &mut |_: &Step| count += 1);
        assert_eq!(plain, observed);
        assert_eq!(plain, "Hello World!\n");
        assert!(count > 0);
    }

    #[test]
    fn empty_program() {
        let mut engine = engine("no commands here");
        assert_eq!(engine.run("ignored"), "");
        assert!(engine.is_finished());
    }
}
