//! Interpreter for the eight-command tape language.
//!
//! Source is filtered by the [`lexer`], brackets are paired once by the
//! [`resolver`], and loops that only clear or redistribute a cell are
//! recognized by the [`optimizer`] so the [`Engine`] can apply them in a
//! single step instead of iterating.

pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod optimizer;
pub mod resolver;

pub use interpreter::{
    engine::{Engine, EngineConfig, DEFAULT_TAPE_SIZE},
    naive_interpreter::NaiveInterpreter,
    observer::{Step, StepObserver},
    tape::Tape,
};
pub use lexer::{tokenize, Command, Position, Program};
pub use optimizer::{LoopKind, MultiplyLoop, Optimization, Optimizations};
pub use resolver::{resolve, resolve_jumps, JumpTable, MalformedProgram, ResolvedProgram};
