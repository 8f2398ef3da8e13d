use super::{Command, Position, Program};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            chars: chars.chars(),
        }
    }

    fn consume_char(&mut self) -> Option<(char, Position)> {
        let c = self.chars.next()?;
        let position = Position {
            line: self.cur_line,
            column: self.cur_col,
        };

        self.cur_col += 1;
        if c == '\n' {
            self.cur_line += 1;
            self.cur_col = 1;
        }
        Some((c, position))
    }

    /// Next command in the stream, everything else is a comment and is skipped
    pub fn next_token(&mut self) -> Option<(Command, Position)> {
        while let Some((c, position)) = self.consume_char() {
            if let Some(command) = Command::from_char(c) {
                return Some((command, position));
            }
        }
        None
    }

    pub fn collect_program(&mut self) -> Program {
        let mut commands = vec![];
        let mut positions = vec![];
        while let Some((command, position)) = self.next_token() {
            commands.push(command);
            positions.push(position);
        }
        Program::new(commands, positions)
    }
}

/// Filter `text` down to the command alphabet, brackets are not checked here
pub fn tokenize(text: &str) -> Program {
    Lexer::new(text).collect_program()
}
