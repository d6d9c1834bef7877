use std::fmt;

/// Location of the reader cursor when an error was detected. `line` and
/// `column` are 1-based, `offset` is a byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Position { Position { offset: 0, line: 1, column: 1 } }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}:{}", self.line, self.column) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    UnterminatedString,
    InvalidEscapeSequence(char),
    NewlineInString,
    MissingCloseParen,
    UnexpectedCloseParen,
    UnexpectedEof,
    NestingTooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: Position) -> SyntaxError { SyntaxError { kind, position } }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            SyntaxErrorKind::InvalidEscapeSequence(c) => write!(f, "invalid escape sequence `\\{}`", c.escape_default()),
            SyntaxErrorKind::NewlineInString => write!(f, "string literal cannot contain newline"),
            SyntaxErrorKind::MissingCloseParen => write!(f, "missing closing parenthesis"),
            SyntaxErrorKind::UnexpectedCloseParen => write!(f, "unexpected closing parenthesis"),
            SyntaxErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            SyntaxErrorKind::NestingTooDeep(limit) => write!(f, "forms nested deeper than {} levels", limit),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "SyntaxError at {}: {}", self.position, self.kind) }
}

impl std::error::Error for SyntaxError {}

#[macro_export]
macro_rules! syntax_error {
    ($kind:expr, $pos:expr) => {
        return Err($crate::reader::error::SyntaxError::new($kind, $pos))
    };
}
