pub mod config;
pub mod interpreter;
pub mod logging;
pub mod reader;

use std::fmt;

pub use config::Config;
pub use interpreter::{Interpreter, RuntimeError, Value};
pub use reader::{Node, SyntaxError};

/// How a program finished when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    /// `(EXIT)` was called; later forms were not evaluated.
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax(err) => write!(f, "{}", err),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self { Error::Syntax(err) }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self { Error::Runtime(err) }
}

/// Runs a program against stdin/stdout with the default configuration.
pub fn run(source: &str) -> Result<Status, Error> { Interpreter::new(Config::default()).run(source) }
