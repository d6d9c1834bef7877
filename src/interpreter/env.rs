use std::collections::HashMap;
use std::fmt;

use crate::interpreter::error::RuntimeError;
use crate::interpreter::native::NATIVES;
use crate::interpreter::value::Value;
use crate::runtime_error;

/// One link of the scope chain. A child borrows its parent, so a `let`
/// scope lives exactly as long as the evaluation frame that created it.
pub struct Env<'p> {
    parent: Option<&'p Env<'p>>,
    values: HashMap<String, Value>,
}

impl fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "<Env {:?}>", parent),
            None => write!(f, "<Env>"),
        }
    }
}

impl Env<'static> {
    /// The global scope: every native function, nothing else.
    pub fn new_root() -> Env<'static> {
        let values = NATIVES
            .entries()
            .map(|(name, native)| (name.to_string(), Value::Native(*native)))
            .collect();
        Env { parent: None, values }
    }
}

impl<'p> Env<'p> {
    pub fn new_child(parent: &'p Env<'p>) -> Env<'p> {
        Env {
            parent: Some(parent),
            values: HashMap::new(),
        }
    }

    // Define a name in this scope only; names already defined here are an error
    pub fn define(&mut self, key: String, value: Value) -> Result<(), RuntimeError> {
        if self.values.contains_key(&key) {
            runtime_error!(RuntimeError::DuplicateBinding(key))
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.values.get(key) {
            Some(val) => Some(val),
            // Recurse up the chain until a value is found or the root is reached
            None => self.parent.and_then(|parent| parent.get(key)),
        }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn is_root(&self) -> bool { self.parent.is_none() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::native::Native;

    #[test]
    fn test_root_holds_natives() {
        let root = Env::new_root();
        assert!(root.is_root());
        assert_eq!(root.len(), 6);
        assert_eq!(root.get("PRINT-INT"), Some(&Value::Native(Native::PrintInt)));
        assert_eq!(root.get("print-int"), None);
    }

    #[test]
    fn test_child_lookup_walks_parents() {
        let root = Env::new_root();
        let mut outer = Env::new_child(&root);
        assert!(outer.is_empty());
        outer.define("X".into(), Value::Integer(1)).unwrap();
        let mut inner = Env::new_child(&outer);
        inner.define("Y".into(), Value::Integer(2)).unwrap();

        assert_eq!(inner.get("X"), Some(&Value::Integer(1)));
        assert_eq!(inner.get("Y"), Some(&Value::Integer(2)));
        assert_eq!(inner.get("+"), Some(&Value::Native(Native::Add)));
        assert_eq!(outer.get("Y"), None);
    }

    #[test]
    fn test_shadowing_and_duplicates() {
        let root = Env::new_root();
        let mut child = Env::new_child(&root);
        child.define("+".into(), Value::Integer(3)).unwrap();
        assert_eq!(child.get("+"), Some(&Value::Integer(3)));
        assert_eq!(
            child.define("+".into(), Value::Integer(4)),
            Err(RuntimeError::DuplicateBinding("+".into()))
        );
    }
}
