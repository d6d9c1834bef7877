use std::io::{BufRead, Write};

use tracing::trace;

use crate::config::Config;
use crate::interpreter::env::Env;
use crate::interpreter::error::{RuntimeError, Unwind};
use crate::interpreter::native::Io;
use crate::interpreter::special::SpecialForm;
use crate::interpreter::value::Value;
use crate::reader::Node;
use crate::runtime_error;

/// Tree-walking evaluator. Borrows the interpreter's streams for the
/// duration of one top-level form and counts list nesting as it recurses.
pub struct Evaluator<'i, R, W> {
    io: &'i mut Io<R, W>,
    depth: usize,
    max_depth: usize,
}

pub fn lookup(env: &Env<'_>, name: &str) -> Result<Value, RuntimeError> {
    env.get(name).cloned().ok_or_else(|| RuntimeError::UnboundSymbol(name.into()))
}

impl<'i, R: BufRead, W: Write> Evaluator<'i, R, W> {
    pub fn new(io: &'i mut Io<R, W>, config: &Config) -> Evaluator<'i, R, W> {
        Evaluator {
            io,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    pub fn eval(&mut self, env: &Env<'_>, node: &Node) -> Result<Value, Unwind> {
        match node {
            Node::Integer(i) => Ok(Value::Integer(*i)),
            Node::String(text) => Ok(Value::string(text)),
            Node::Symbol(name) => Ok(lookup(env, name)?),
            Node::List(nodes) => {
                if self.depth >= self.max_depth {
                    runtime_error!(RuntimeError::RecursionLimitExceeded(self.max_depth))
                }
                self.depth += 1;
                let result = self.eval_list(env, node, nodes);
                self.depth -= 1;
                result
            }
        }
    }

    fn eval_list(&mut self, env: &Env<'_>, form: &Node, nodes: &[Node]) -> Result<Value, Unwind> {
        trace!(depth = self.depth, "eval {}", form);
        let (operator, args) = match nodes.split_first() {
            Some(split) => split,
            None => runtime_error!(RuntimeError::EmptyForm),
        };
        let name = match operator.as_symbol() {
            Some(name) => name,
            None => runtime_error!(RuntimeError::InvalidOperator { form: form.to_string() }),
        };

        match SpecialForm::lookup(name) {
            Some(SpecialForm::If) => self.eval_if(env, args),
            Some(SpecialForm::Let) => self.eval_let(env, form, args),
            None => self.eval_call(env, name, args),
        }
    }

    /// (IF condition then else): only the chosen branch is evaluated.
    fn eval_if(&mut self, env: &Env<'_>, args: &[Node]) -> Result<Value, Unwind> {
        let [condition, then_branch, else_branch] = args else {
            runtime_error!(arity_mismatch(SpecialForm::If, "exactly 3", args.len()))
        };

        let value = self.eval(env, condition)?;
        match value.truthy() {
            Some(true) => self.eval(env, then_branch),
            Some(false) => self.eval(env, else_branch),
            None => runtime_error!(RuntimeError::TypeMismatch {
                name: SpecialForm::If.name().into(),
                expected: "integer",
                got: format!("{} {:?}", value.type_name(), value),
            }),
        }
    }

    /// (LET (name expr ...) body ...): every expr is evaluated in the outer
    /// scope before any name is bound, then the body runs in a child scope
    /// that is dropped on return.
    fn eval_let(&mut self, env: &Env<'_>, form: &Node, args: &[Node]) -> Result<Value, Unwind> {
        if args.len() < 2 {
            runtime_error!(arity_mismatch(SpecialForm::Let, "at least 2", args.len()))
        }
        let bindings = match &args[0] {
            Node::List(bindings) if bindings.len() % 2 == 0 => bindings,
            _ => runtime_error!(RuntimeError::InvalidBinding { form: form.to_string() }),
        };

        let mut values = Vec::with_capacity(bindings.len() / 2);
        for pair in bindings.chunks(2) {
            let name = match pair[0].as_symbol() {
                Some(name) => name,
                None => runtime_error!(RuntimeError::InvalidBinding { form: form.to_string() }),
            };
            values.push((name, self.eval(env, &pair[1])?));
        }

        let mut scope = Env::new_child(env);
        for (name, value) in values {
            scope.define(name.to_string(), value)?;
        }

        let mut result = Value::Integer(0);
        for expr in &args[1..] {
            result = self.eval(&scope, expr)?;
        }
        Ok(result)
    }

    /// Arguments are evaluated left to right before the operator is resolved.
    fn eval_call(&mut self, env: &Env<'_>, name: &str, args: &[Node]) -> Result<Value, Unwind> {
        let values = args
            .iter()
            .map(|arg| self.eval(env, arg))
            .collect::<Result<Vec<Value>, Unwind>>()?;

        match lookup(env, name)? {
            Value::Native(native) => native.call(values, self.io),
            other => runtime_error!(RuntimeError::NotCallable {
                name: name.into(),
                value: format!("{:?}", other),
            }),
        }
    }
}

fn arity_mismatch(form: SpecialForm, expected: &str, got: usize) -> RuntimeError {
    RuntimeError::ArityMismatch {
        name: form.name().into(),
        expected: expected.into(),
        got,
    }
}
