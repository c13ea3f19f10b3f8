//! Evaluator closures.
//!
//! Each constructor wraps already-built children into a closure for one node.
//! Types were checked when the expression was built, so the closures only
//! verify what the host hands over at run time: bindings, members and
//! function results.

use std::sync::Arc;

use tracing::debug;

use crate::{
    builder::resolve::{self, MemberAccess},
    evaluator::{
        ExecutionError, ExecutionErrorKind,
        operators::{BinaryRule, Semantics, UnaryRule},
    },
    symbols::ValueTable,
    syntax::Position,
    types::{Signature, Type},
    values::Value,
};

/// A compiled node: a function of the run-time value table.
pub type Evaluator = Box<dyn Fn(&ValueTable) -> Result<Value, ExecutionError> + Send + Sync>;

pub fn constant(value: Value) -> Evaluator {
    Box::new(move |_| Ok(value.clone()))
}

/// Read `name` from the value table, checking it against the declared type.
pub fn lookup(name: String, ty: Type, position: Position) -> Evaluator {
    Box::new(move |values| match values.get(&name) {
        Some(value) if value.conforms_to(&ty) => Ok(value.clone()),
        found => {
            debug!(
                name = %name,
                expected = %ty,
                found = ?found.map(|value| value.ty()),
                "value table does not honour the declared type table"
            );
            Err(ExecutionError::new(
                ExecutionErrorKind::UnboundIdentifier { name: name.clone() },
                position,
            ))
        }
    })
}

pub fn unary(rule: &'static UnaryRule, operand: Evaluator, position: Position) -> Evaluator {
    Box::new(move |values| {
        let value = operand(values)?;
        (rule.compute)(rule.op, &value).map_err(|kind| ExecutionError::new(kind, position))
    })
}

pub fn binary(
    rule: &'static BinaryRule,
    left: Evaluator,
    right: Evaluator,
    position: Position,
) -> Evaluator {
    match rule.semantics {
        Semantics::Strict(compute) => Box::new(move |values| {
            let l = left(values)?;
            let r = right(values)?;
            compute(rule.op, &l, &r).map_err(|kind| ExecutionError::new(kind, position))
        }),
        Semantics::ShortCircuit { decisive } => Box::new(move |values| {
            let mismatch = || {
                ExecutionError::new(
                    ExecutionErrorKind::OperandMismatch {
                        op: rule.op.to_string(),
                    },
                    position,
                )
            };
            match left(values)? {
                Value::Bool(l) if l == decisive => Ok(Value::Bool(decisive)),
                Value::Bool(_) => match right(values)? {
                    Value::Bool(r) => Ok(Value::Bool(r)),
                    _ => Err(mismatch()),
                },
                _ => Err(mismatch()),
            }
        }),
    }
}

/// Select a field or a bound method from the object `target` evaluates to.
pub fn select(target: Evaluator, name: String, access: MemberAccess, position: Position) -> Evaluator {
    Box::new(move |values| {
        let object = target(values)?;
        resolve::read_member(&object, &name, &access, position)
    })
}

/// Evaluate the callee, then the arguments left to right, then invoke.
pub fn call(
    callee: Evaluator,
    name: String,
    signature: Arc<Signature>,
    args: Vec<Evaluator>,
    position: Position,
) -> Evaluator {
    Box::new(move |values| {
        let function = match callee(values)? {
            Value::Function(function) => function,
            _ => {
                return Err(ExecutionError::new(
                    ExecutionErrorKind::OperandMismatch { op: "call".into() },
                    position,
                ));
            }
        };
        let args = args
            .iter()
            .map(|arg| arg(values))
            .collect::<Result<Vec<_>, _>>()?;
        resolve::invoke(&function, &name, &signature, &args, position)
    })
}
