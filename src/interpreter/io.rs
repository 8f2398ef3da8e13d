/// Fixed input consumed front to back. Reading past the end yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCursor {
    chars: Vec<char>,
    cursor: usize,
}

impl InputCursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Next character as a cell value, keeping only its low byte
    pub fn next_byte(&mut self) -> u8 {
        match self.chars.get(self.cursor) {
            Some(&c) => {
                self.cursor += 1;
                (c as u32 & 0xFF) as u8
            }
            None => 0,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.chars.len() - self.cursor
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

/// Append-only output, one char per written cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSink {
    buffer: String,
}

impl OutputSink {
    pub fn push(&mut self, value: u8) {
        self.buffer.push(char::from(value));
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
