use thiserror::Error;

use crate::syntax::{BinaryOp, Position, UnaryOp};

/// Error raised while building an expression.
///
/// Displays as `"<position>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {kind}")]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub position: Position,
}

impl BuildError {
    pub fn new(kind: BuildErrorKind, position: impl Into<Position>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildErrorKind {
    #[error("unsupported unary operator: {op}")]
    UnsupportedUnaryOperator { op: UnaryOp },

    #[error("unsupported binary operation {op}")]
    UnsupportedBinaryOperation { op: BinaryOp },

    #[error("type mismatch in binary expression")]
    TypeMismatchInBinaryExpression,

    /// `index` is 1-based.
    #[error("type mismatch in argument {index}")]
    TypeMismatchInArgument { index: usize },

    #[error("unknown identifier: {name}")]
    UnknownIdentifier { name: String },

    #[error("unknown selector {name} for {type_name}")]
    UnknownSelector { name: String, type_name: String },

    #[error("unknown function {name}")]
    UnknownFunction { name: String },

    #[error("variadic functions are not supported: {name}")]
    VariadicFunctionsNotSupported { name: String },

    /// A node kind the builder never compiles (index, slice, type assertion,
    /// function literal, pointer dereference).
    #[error("unknown expression type")]
    UnknownExpressionType { kind: &'static str },

    #[error("wrong number of arguments to {name}: expected {expected}, found {found}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("expression nesting exceeds maximum depth of {max_depth}")]
    ExpressionTooDeep { max_depth: usize },
}

impl BuildErrorKind {
    /// Short hint shown by diagnostic renderers.
    pub fn help(&self) -> Option<String> {
        match self {
            BuildErrorKind::UnsupportedUnaryOperator { .. } => {
                Some("only `!` on bool and `-` on int or double are supported".to_string())
            }
            BuildErrorKind::UnsupportedBinaryOperation { .. } => Some(
                "supported operators are + - * / == != && ||".to_string(),
            ),
            BuildErrorKind::TypeMismatchInBinaryExpression => {
                Some("both operands must have the same type; there is no implicit conversion".to_string())
            }
            BuildErrorKind::UnknownExpressionType { kind } => {
                Some(format!("{} is not supported", kind))
            }
            BuildErrorKind::UnknownIdentifier { name } => {
                Some(format!("declare `{}` in the type table", name))
            }
            _ => None,
        }
    }
}
