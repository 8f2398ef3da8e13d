pub mod lexer;

pub use lexer::{tokenize, Lexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // `>`: Increment the `data pointer` by one
    MoveRight,
    // `<`: Decrement the `data pointer` by one
    MoveLeft,

    // `+`: Increment the byte at the `data pointer` by one
    Increment,
    // `-`: Decrement the byte at the `data pointer` by one
    Decrement,

    // `.`: Write the byte at the `data pointer` to the output
    Write,
    // `,`: Read the next input character and write it to the `data pointer`
    Read,

    // `[`: If the byte at the `data pointer` is zero, jump past the matching `]`
    LoopStart,
    // `]`: If the byte at the `data pointer` is non-zero, jump back past the matching `[`
    LoopEnd,
}

impl Command {
    pub fn from_char(c: char) -> Option<Command> {
        match c {
            '>' => Some(Command::MoveRight),
            '<' => Some(Command::MoveLeft),
            '+' => Some(Command::Increment),
            '-' => Some(Command::Decrement),
            '.' => Some(Command::Write),
            ',' => Some(Command::Read),
            '[' => Some(Command::LoopStart),
            ']' => Some(Command::LoopEnd),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::MoveRight => '>',
            Command::MoveLeft => '<',
            Command::Increment => '+',
            Command::Decrement => '-',
            Command::Write => '.',
            Command::Read => ',',
            Command::LoopStart => '[',
            Command::LoopEnd => ']',
        }
    }
}

/// Human readable location of a command in the source text (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// The filtered command stream; never changes once tokenized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    commands: Vec<Command>,
    positions: Vec<Position>,
}

impl Program {
    pub fn new(commands: Vec<Command>, positions: Vec<Position>) -> Self {
        debug_assert_eq!(commands.len(), positions.len());
        Self {
            commands,
            positions,
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn position(&self, index: usize) -> Position {
        self.positions.get(index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for command in self.commands.iter() {
            write!(f, "{}", command.as_char())?;
        }
        Ok(())
    }
}
