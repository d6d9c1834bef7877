use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::Config;
use crate::reader::error::{SyntaxError, SyntaxErrorKind};
use crate::reader::lexer::Cursor;
use crate::syntax_error;

/// A parsed form. Symbols are stored upcased, integers are whatever a run
/// of ASCII digits folds to in an `i32` (wrapping).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Node {
    List(Vec<Node>),
    Symbol(String),
    String(String),
    Integer(i32),
}

impl Node {
    pub fn symbol(name: &str) -> Node { Node::Symbol(name.to_ascii_uppercase()) }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Node::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Classifies an upcased atom: all ASCII digits is an integer, anything
    /// else (including a leading `-`) is a symbol.
    fn from_atom(atom: String) -> Node {
        if !atom.is_empty() && atom.bytes().all(|b| b.is_ascii_digit()) {
            let value = atom
                .bytes()
                .fold(0i32, |acc, b| acc.wrapping_mul(10).wrapping_add((b - b'0') as i32));
            Node::Integer(value)
        } else {
            Node::Symbol(atom)
        }
    }
}

/// Source form of a node; re-reading the output yields an equal tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::List(nodes) => {
                let strs: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
                write!(f, "({})", strs.join(" "))
            }
            Node::Symbol(name) => write!(f, "{}", name),
            Node::String(text) => write!(f, "\"{}\"", text.replace('"', "\\\"").replace('\n', "\\n")),
            Node::Integer(val) => write!(f, "{}", val),
        }
    }
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str, config: &Config) -> Parser<'a> {
        Parser {
            cursor: Cursor::new(src),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Parses forms until a `)` or end of input, leaving the `)` unconsumed.
    pub fn parse_list(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        self.cursor.skip_whitespace();
        while !self.cursor.is_eof() && self.cursor.peek() != Some(')') {
            nodes.push(self.parse_one()?);
            self.cursor.skip_whitespace();
        }
        Ok(nodes)
    }

    /// Parses exactly one form starting at the next non-whitespace character.
    pub fn parse_one(&mut self) -> Result<Node, SyntaxError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();
        match self.cursor.peek() {
            None => syntax_error!(SyntaxErrorKind::UnexpectedEof, start),
            Some(')') => syntax_error!(SyntaxErrorKind::UnexpectedCloseParen, start),
            Some('(') => {
                if self.depth >= self.max_depth {
                    syntax_error!(SyntaxErrorKind::NestingTooDeep(self.max_depth), start);
                }
                self.cursor.bump();
                self.depth += 1;
                let nodes = self.parse_list();
                self.depth -= 1;
                let nodes = nodes?;
                if self.cursor.bump() != Some(')') {
                    syntax_error!(SyntaxErrorKind::MissingCloseParen, start);
                }
                Ok(Node::List(nodes))
            }
            Some('"') => Ok(Node::String(self.cursor.read_string()?)),
            Some(_) => Ok(Node::from_atom(self.cursor.read_atom())),
        }
    }

    /// Parses a whole program. A stray `)` at top level is an error rather
    /// than the silent end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let nodes = self.parse_list()?;
        if !self.cursor.is_eof() {
            syntax_error!(SyntaxErrorKind::UnexpectedCloseParen, self.cursor.position());
        }
        trace!("parsed {} top-level forms", nodes.len());
        Ok(nodes)
    }
}

pub fn parse(src: &str, config: &Config) -> Result<Vec<Node>, SyntaxError> { Parser::new(src, config).parse_program() }
