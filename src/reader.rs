pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Position, SyntaxError, SyntaxErrorKind};
pub use parser::{parse, Node, Parser};
