//! Runtime evaluation errors.
//!
//! Type errors never reach the evaluator: they are rejected when the
//! expression is built. What remains are failures raised by host functions,
//! integer division by zero, and host data that breaks the contract the
//! expression was built against (a missing binding, a missing member, an
//! undeclared failure, a result of the wrong type).

use thiserror::Error;

use crate::{syntax::Position, values::FunctionError};

/// Runtime evaluation error.
///
/// Displays as the kind's message alone, so a failure raised by a host
/// function reads exactly as the host wrote it. The position of the node that
/// failed is kept alongside.
#[derive(Debug)]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub position: Position,
}

#[derive(Debug, Error)]
pub enum ExecutionErrorKind {
    /// A host function declared as fallible returned an error.
    #[error("{source}")]
    FunctionFailed { name: String, source: FunctionError },

    /// A host function declared with a single result returned an error.
    #[error("{name} failed without declaring an error result: {source}")]
    UndeclaredFailure { name: String, source: FunctionError },

    /// The value table lacks a binding the expression was built with, or
    /// binds it to a value of another type.
    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },

    /// A host object lacks a member its type declares, or yields a value of
    /// another type.
    #[error("unbound member {name} for {type_name}")]
    UnboundMember { name: String, type_name: String },

    /// A host function produced a value that does not match its signature.
    #[error("unexpected result from {name}: expected {expected}, found {found}")]
    UnexpectedResultType {
        name: String,
        expected: String,
        found: String,
    },

    #[error("integer division by zero")]
    DivisionByZero,

    /// Operands do not have the kinds the operator table entry was selected
    /// for. Only reachable if host data slips past the boundary checks.
    #[error("operand mismatch for {op}")]
    OperandMismatch { op: String },
}

impl ExecutionError {
    pub fn new(kind: ExecutionErrorKind, position: impl Into<Position>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }
}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
