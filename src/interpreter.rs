pub mod ast_walk;
pub mod env;
pub mod error;
pub mod native;
pub mod special;
pub mod value;


use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::config::Config;
use crate::reader::{self, Node, SyntaxError};
use crate::{Error, Status};

pub use ast_walk::Evaluator;
pub use env::Env;
pub use error::{RuntimeError, Unwind};
pub use native::{Io, Native};
pub use value::Value;

/// Owns the global scope and the standard streams, and evaluates top-level
/// forms against them.
pub struct Interpreter<R, W> {
    root: Env<'static>,
    io: Io<R, W>,
    config: Config,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    pub fn new(config: Config) -> Self { Interpreter::with_io(io::stdin().lock(), io::stdout(), config) }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn with_io(input: R, output: W, config: Config) -> Self {
        Interpreter {
            root: Env::new_root(),
            io: Io { input, output },
            config,
        }
    }

    pub fn into_output(self) -> W { self.io.output }

    pub fn parse(&self, src: &str) -> Result<Vec<Node>, SyntaxError> { reader::parse(src, &self.config) }

    /// Evaluates one form in the global scope.
    pub fn eval(&mut self, node: &Node) -> Result<Value, Unwind> {
        let Interpreter { root, io, config } = self;
        Evaluator::new(io, config).eval(root, node)
    }

    /// Parses the whole source, then evaluates each top-level form in order,
    /// discarding the results. Nothing runs if the source fails to parse.
    pub fn run(&mut self, src: &str) -> Result<Status, Error> {
        let nodes = self.parse(src)?;
        let result = self.run_nodes(&nodes);
        self.io.output.flush().map_err(RuntimeError::from)?;
        result
    }

    /// Like `run`, but keeps the value of every form evaluated before the
    /// program finished or exited.
    pub fn execute(&mut self, src: &str) -> Result<(Status, Vec<Value>), Error> {
        let nodes = self.parse(src)?;
        let mut values = Vec::with_capacity(nodes.len());
        let mut status = Status::Completed;
        for node in &nodes {
            match self.eval(node) {
                Ok(value) => values.push(value),
                Err(Unwind::Exit) => {
                    status = Status::Exited;
                    break;
                }
                Err(Unwind::Error(err)) => {
                    self.io.output.flush().map_err(RuntimeError::from)?;
                    return Err(err.into());
                }
            }
        }
        self.io.output.flush().map_err(RuntimeError::from)?;
        Ok((status, values))
    }

    pub fn run_nodes(&mut self, nodes: &[Node]) -> Result<Status, Error> {
        for node in nodes {
            debug!("top-level {}", node);
            match self.eval(node) {
                Ok(value) => debug!("=> {:?}", value),
                Err(Unwind::Exit) => {
                    debug!("EXIT called, skipping remaining forms");
                    return Ok(Status::Exited);
                }
                Err(Unwind::Error(err)) => return Err(err.into()),
            }
        }
        Ok(Status::Completed)
    }
}
