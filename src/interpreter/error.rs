use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    EmptyForm,
    InvalidOperator { form: String },
    ArityMismatch { name: String, expected: String, got: usize },
    UnboundSymbol(String),
    NotCallable { name: String, value: String },
    TypeMismatch { name: String, expected: &'static str, got: String },
    InvalidBinding { form: String },
    DuplicateBinding(String),
    RecursionLimitExceeded(usize),
    InvalidInput(String),
    Io(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RuntimeError: ")?;
        match self {
            RuntimeError::EmptyForm => write!(f, "an empty list cannot be evaluated"),
            RuntimeError::InvalidOperator { form } => write!(f, "first element of list must be a symbol: {}", form),
            RuntimeError::ArityMismatch { name, expected, got } => write!(f, "{} needs {} arguments, but got {}", name, expected, got),
            RuntimeError::UnboundSymbol(name) => write!(f, "'{}' does not exist", name),
            RuntimeError::NotCallable { name, value } => write!(f, "'{}' is not a function: {}", name, value),
            RuntimeError::TypeMismatch { name, expected, got } => write!(f, "{} expected {}, but got {}", name, expected, got),
            RuntimeError::InvalidBinding { form } => write!(f, "malformed let bindings: {}", form),
            RuntimeError::DuplicateBinding(name) => write!(f, "duplicate let binding: {}", name),
            RuntimeError::RecursionLimitExceeded(limit) => write!(f, "evaluation nested deeper than {} levels", limit),
            RuntimeError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RuntimeError::Io(msg) => write!(f, "i/o failure: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self { RuntimeError::Io(err.to_string()) }
}

/// Why evaluation stopped before producing a value. `Exit` is raised by the
/// EXIT native and is not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unwind {
    Exit,
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(err: RuntimeError) -> Self { Unwind::Error(err) }
}

impl From<std::io::Error> for Unwind {
    fn from(err: std::io::Error) -> Self { Unwind::Error(err.into()) }
}

#[macro_export]
macro_rules! runtime_error {
    ($err:expr) => {
        return Err($crate::interpreter::error::RuntimeError::from($err).into())
    };
}
