use std::io::{BufRead, Write};

use phf::phf_map;
use tracing::trace;

use crate::interpreter::error::{RuntimeError, Unwind};
use crate::interpreter::value::Value;
use crate::runtime_error;

/// Built-in functions bound in the global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Native {
    PrintString,
    PrintInt,
    ReadInt,
    Add,
    Equal,
    Exit,
}

pub static NATIVES: phf::Map<&'static str, Native> = phf_map! {
    "PRINT-STRING" => Native::PrintString,
    "PRINT-INT" => Native::PrintInt,
    "READ-INT" => Native::ReadInt,
    "+" => Native::Add,
    "=" => Native::Equal,
    "EXIT" => Native::Exit,
};

/// Standard streams seen by the natives.
pub struct Io<R, W> {
    pub input: R,
    pub output: W,
}

impl Native {
    pub fn name(self) -> &'static str {
        match self {
            Native::PrintString => "PRINT-STRING",
            Native::PrintInt => "PRINT-INT",
            Native::ReadInt => "READ-INT",
            Native::Add => "+",
            Native::Equal => "=",
            Native::Exit => "EXIT",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Native::ReadInt | Native::Exit => 0,
            Native::PrintString | Native::PrintInt => 1,
            Native::Add | Native::Equal => 2,
        }
    }

    pub fn call<R: BufRead, W: Write>(self, args: Vec<Value>, io: &mut Io<R, W>) -> Result<Value, Unwind> {
        trace!("native {} {:?}", self.name(), args);
        if args.len() != self.arity() {
            runtime_error!(RuntimeError::ArityMismatch {
                name: self.name().into(),
                expected: self.arity().to_string(),
                got: args.len(),
            })
        }

        match self {
            Native::PrintString => {
                let text = self.string_arg(&args[0])?;
                writeln!(io.output, "{}", text)?;
                Ok(Value::Integer(0))
            }
            Native::PrintInt => {
                let i = self.integer_arg(&args[0])?;
                writeln!(io.output, "{}", i)?;
                Ok(Value::Integer(0))
            }
            Native::ReadInt => {
                io.output.flush()?;
                Ok(Value::Integer(read_int(&mut io.input)?))
            }
            Native::Add => Ok(Value::Integer(self.integer_arg(&args[0])?.wrapping_add(self.integer_arg(&args[1])?))),
            Native::Equal => Ok(Value::Integer((self.integer_arg(&args[0])? == self.integer_arg(&args[1])?) as i32)),
            Native::Exit => {
                io.output.flush()?;
                Err(Unwind::Exit)
            }
        }
    }

    fn integer_arg(self, arg: &Value) -> Result<i32, RuntimeError> {
        arg.as_integer().ok_or_else(|| self.type_mismatch("integer", arg))
    }

    fn string_arg(self, arg: &Value) -> Result<&str, RuntimeError> { arg.as_str().ok_or_else(|| self.type_mismatch("string", arg)) }

    fn type_mismatch(self, expected: &'static str, got: &Value) -> RuntimeError {
        RuntimeError::TypeMismatch {
            name: self.name().into(),
            expected,
            got: format!("{} {:?}", got.type_name(), got),
        }
    }
}

/// Reads the next whitespace-delimited token and parses it as an optionally
/// signed decimal integer. Whitespace after the token is left unread.
fn read_int<R: BufRead>(input: &mut R) -> Result<i32, RuntimeError> {
    let mut token = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let skip = match token.is_empty() {
            true => buf.iter().take_while(|b| b.is_ascii_whitespace()).count(),
            false => 0,
        };
        let rest = &buf[skip..];
        let len = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&rest[..len]);
        let done = len < rest.len();
        input.consume(skip + len);
        if done {
            break;
        }
    }

    if token.is_empty() {
        runtime_error!(RuntimeError::InvalidInput("end of input".into()))
    }
    let text = String::from_utf8_lossy(&token);
    text.parse::<i32>()
        .map_err(|_| RuntimeError::InvalidInput(format!("expected an integer, got {:?}", text)))
}
