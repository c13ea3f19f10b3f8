//! The operator table.
//!
//! A single static table lists every legal `(operator, operand kind)` pairing
//! together with its result kind and its computation. The builder consults it
//! to check an expression and captures the selected entry in the evaluator, so
//! the legality check and the computation can never disagree.

use crate::{
    evaluator::ExecutionErrorKind,
    syntax::{BinaryOp, UnaryOp},
    types::Type,
    values::Value,
};

/// Primitive operand and result kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Double,
    String,
}

impl Kind {
    pub fn of(ty: &Type) -> Option<Kind> {
        match ty {
            Type::Bool => Some(Kind::Bool),
            Type::Int => Some(Kind::Int),
            Type::Double => Some(Kind::Double),
            Type::String => Some(Kind::String),
            Type::Structured(_) | Type::Callable(_) => None,
        }
    }

    pub fn ty(self) -> Type {
        match self {
            Kind::Bool => Type::Bool,
            Kind::Int => Type::Int,
            Kind::Double => Type::Double,
            Kind::String => Type::String,
        }
    }
}

pub type BinaryFn = fn(BinaryOp, &Value, &Value) -> Result<Value, ExecutionErrorKind>;
pub type UnaryFn = fn(UnaryOp, &Value) -> Result<Value, ExecutionErrorKind>;

/// How an operator consumes its operands.
#[derive(Debug, Clone, Copy)]
pub enum Semantics {
    /// Both operands are evaluated, left first.
    Strict(BinaryFn),
    /// The right operand is only evaluated when the left one is not
    /// `decisive`; otherwise `decisive` is the result.
    ShortCircuit { decisive: bool },
}

#[derive(Debug)]
pub struct BinaryRule {
    pub op: BinaryOp,
    pub operand: Kind,
    pub result: Kind,
    pub semantics: Semantics,
}

#[derive(Debug)]
pub struct UnaryRule {
    pub op: UnaryOp,
    pub operand: Kind,
    pub compute: UnaryFn,
}

const fn strict(op: BinaryOp, operand: Kind, result: Kind, compute: BinaryFn) -> BinaryRule {
    BinaryRule {
        op,
        operand,
        result,
        semantics: Semantics::Strict(compute),
    }
}

const fn short_circuit(op: BinaryOp, decisive: bool) -> BinaryRule {
    BinaryRule {
        op,
        operand: Kind::Bool,
        result: Kind::Bool,
        semantics: Semantics::ShortCircuit { decisive },
    }
}

static BINARY_RULES: &[BinaryRule] = &[
    strict(BinaryOp::Add, Kind::Int, Kind::Int, int_arithmetic),
    strict(BinaryOp::Add, Kind::Double, Kind::Double, double_arithmetic),
    strict(BinaryOp::Add, Kind::String, Kind::String, concat),
    strict(BinaryOp::Sub, Kind::Int, Kind::Int, int_arithmetic),
    strict(BinaryOp::Sub, Kind::Double, Kind::Double, double_arithmetic),
    strict(BinaryOp::Mul, Kind::Int, Kind::Int, int_arithmetic),
    strict(BinaryOp::Mul, Kind::Double, Kind::Double, double_arithmetic),
    strict(BinaryOp::Div, Kind::Int, Kind::Int, int_arithmetic),
    strict(BinaryOp::Div, Kind::Double, Kind::Double, double_arithmetic),
    strict(BinaryOp::Eq, Kind::Bool, Kind::Bool, equality),
    strict(BinaryOp::Eq, Kind::Int, Kind::Bool, equality),
    strict(BinaryOp::Eq, Kind::Double, Kind::Bool, equality),
    strict(BinaryOp::Eq, Kind::String, Kind::Bool, equality),
    strict(BinaryOp::Ne, Kind::Bool, Kind::Bool, equality),
    strict(BinaryOp::Ne, Kind::Int, Kind::Bool, equality),
    strict(BinaryOp::Ne, Kind::Double, Kind::Bool, equality),
    strict(BinaryOp::Ne, Kind::String, Kind::Bool, equality),
    short_circuit(BinaryOp::LogicalAnd, false),
    short_circuit(BinaryOp::LogicalOr, true),
];

static UNARY_RULES: &[UnaryRule] = &[
    UnaryRule {
        op: UnaryOp::Not,
        operand: Kind::Bool,
        compute: negate,
    },
    UnaryRule {
        op: UnaryOp::Neg,
        operand: Kind::Int,
        compute: negate,
    },
    UnaryRule {
        op: UnaryOp::Neg,
        operand: Kind::Double,
        compute: negate,
    },
];

/// Whether `op` has any entry in the table.
pub fn is_binary_supported(op: BinaryOp) -> bool {
    BINARY_RULES.iter().any(|rule| rule.op == op)
}

/// The entry for `op` applied to operands of the given types, if any.
///
/// Both operands must have the same primitive type.
pub fn binary_rule(op: BinaryOp, left: &Type, right: &Type) -> Option<&'static BinaryRule> {
    if left != right {
        return None;
    }
    let kind = Kind::of(left)?;
    BINARY_RULES
        .iter()
        .find(|rule| rule.op == op && rule.operand == kind)
}

pub fn is_unary_supported(op: UnaryOp) -> bool {
    UNARY_RULES.iter().any(|rule| rule.op == op)
}

pub fn unary_rule(op: UnaryOp, operand: &Type) -> Option<&'static UnaryRule> {
    let kind = Kind::of(operand)?;
    UNARY_RULES
        .iter()
        .find(|rule| rule.op == op && rule.operand == kind)
}

fn mismatch(op: impl ToString) -> ExecutionErrorKind {
    ExecutionErrorKind::OperandMismatch { op: op.to_string() }
}

/// Integer `+ - * /` with Go's two's-complement semantics.
///
/// Results wrap around at the `i64` bounds. A zero divisor is reported as
/// `DivisionByZero`.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, ExecutionErrorKind> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(ExecutionErrorKind::DivisionByZero)
            } else {
                // i64::MIN / -1 wraps.
                Ok(left.wrapping_div(right))
            }
        }
        _ => Err(mismatch(op)),
    }
}

/// Float64 `+ - * /`. Division by zero yields an infinity or NaN.
pub(super) fn eval_binary_double(op: BinaryOp, left: f64, right: f64) -> Result<f64, ExecutionErrorKind> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => Ok(left / right),
        _ => Err(mismatch(op)),
    }
}

fn int_arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecutionErrorKind> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_binary_int(op, *a, *b).map(Value::Int),
        _ => Err(mismatch(op)),
    }
}

fn double_arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecutionErrorKind> {
    match (left, right) {
        (Value::Double(a), Value::Double(b)) => eval_binary_double(op, *a, *b).map(Value::Double),
        _ => Err(mismatch(op)),
    }
}

fn concat(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecutionErrorKind> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::str(joined))
        }
        _ => Err(mismatch(op)),
    }
}

fn equality(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecutionErrorKind> {
    // Kinds were checked at build time; a differing pair here is host data
    // that slipped past the boundary.
    if core::mem::discriminant(left) != core::mem::discriminant(right) {
        return Err(mismatch(op));
    }
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::Ne => Ok(Value::Bool(left != right)),
        _ => Err(mismatch(op)),
    }
}

fn negate(op: UnaryOp, operand: &Value) -> Result<Value, ExecutionErrorKind> {
    match (op, operand) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, Value::Int(i)) => Ok(Value::Int(i.wrapping_neg())),
        (UnaryOp::Neg, Value::Double(d)) => Ok(Value::Double(-d)),
        _ => Err(mismatch(op)),
    }
}
