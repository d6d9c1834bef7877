use std::fmt;
use std::rc::Rc;

use crate::interpreter::native::Native;

/// Result of evaluating a node. String payloads are shared, so a value can
/// outlive the node or scope entry it came from.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    String(Rc<str>),
    Integer(i32),
    Native(Native),
}

impl Value {
    pub fn string(text: &str) -> Value { Value::String(Rc::from(text)) }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Native(_) => "native function",
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Only integers have a truth value; nonzero is true.
    pub fn truthy(&self) -> Option<bool> { self.as_integer().map(|i| i != 0) }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Integer(i) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Native(n) => write!(f, "#<native:{}>", n.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            _ => write!(f, "{}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(Value::string("a\"b").to_string(), "a\"b");
        assert_eq!(format!("{:?}", Value::string("a\"b")), "\"a\\\"b\"");
        assert_eq!(format!("{:?}", Value::Integer(-3)), "-3");
        assert_eq!(Value::Native(Native::Add).to_string(), "#<native:+>");
    }

    #[test]
    fn test_truthiness() {
        assert_eq!(Value::Integer(0).truthy(), Some(false));
        assert_eq!(Value::Integer(-1).truthy(), Some(true));
        assert_eq!(Value::string("").truthy(), None);
        assert_eq!(Value::Native(Native::Exit).truthy(), None);
    }
}
