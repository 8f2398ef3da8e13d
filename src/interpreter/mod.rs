pub mod engine;
pub mod io;
pub mod naive_interpreter;
pub mod observer;
pub mod tape;

use self::{
    io::{InputCursor, OutputSink},
    tape::Tape,
};

/// Memory and I/O shared by every interpreter
#[derive(Debug, Clone)]
pub struct Runtime {
    tape: Tape,
    input: InputCursor,
    output: OutputSink,
}

impl Runtime {
    pub fn new(tape_size: usize) -> Self {
        Self {
            tape: Tape::new(tape_size),
            input: InputCursor::default(),
            output: OutputSink::default(),
        }
    }

    pub fn reset(&mut self) {
        self.tape.reset();
        self.input.rewind();
        self.output.clear();
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = InputCursor::new(input);
    }

    /// Read the next input character into the data pointer
    pub fn read(&mut self) {
        let value = self.input.next_byte();
        self.tape.set(value);
    }

    /// Write the value at the data pointer to the output
    pub fn write(&mut self) {
        self.output.push(self.tape.get());
    }

    pub fn deref_increment(&mut self) {
        self.tape.increment();
    }

    pub fn deref_decrement(&mut self) {
        self.tape.decrement();
    }

    pub fn shift_right(&mut self) {
        self.tape.move_right();
    }

    pub fn shift_left(&mut self) {
        self.tape.move_left();
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape.get() == 0
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    pub fn output(&self) -> &str {
        self.output.as_str()
    }
}
