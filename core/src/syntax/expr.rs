use serde::{Deserialize, Serialize};

use super::{BinaryOp, Position, UnaryOp};

/// Literal constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
    // Compiles to a one-character string.
    Char(char),
}

/// Node kinds that can appear in a tree but are never compiled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnsupportedKind {
    /// `a[i]`, including map subscripts.
    Index,
    /// `a[i:j]`
    Slice,
    /// `x.(T)`
    TypeAssertion,
    /// `func(...) ... { ... }`
    FunctionLiteral,
    /// `*x`
    Dereference,
}

impl UnsupportedKind {
    pub fn description(&self) -> &'static str {
        match self {
            UnsupportedKind::Index => "index expression",
            UnsupportedKind::Slice => "slice expression",
            UnsupportedKind::TypeAssertion => "type assertion",
            UnsupportedKind::FunctionLiteral => "function literal",
            UnsupportedKind::Dereference => "pointer dereference",
        }
    }
}

/// Expression tree node.
///
/// Positions follow one convention: binary nodes carry the operator's
/// position, selectors the selected name's, calls the callee's start, and
/// every other node its own start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal {
        value: Literal,
        position: Position,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        position: Position,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: Position,
    },
    Paren {
        inner: Box<Expr>,
        position: Position,
    },
    Ident {
        name: String,
        position: Position,
    },
    Selector {
        target: Box<Expr>,
        name: String,
        position: Position,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        position: Position,
    },
    Unsupported {
        kind: UnsupportedKind,
        position: Position,
    },
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::Literal { position, .. }
            | Expr::Unary { position, .. }
            | Expr::Binary { position, .. }
            | Expr::Paren { position, .. }
            | Expr::Ident { position, .. }
            | Expr::Selector { position, .. }
            | Expr::Call { position, .. }
            | Expr::Unsupported { position, .. } => *position,
        }
    }

    // ============================================================================
    // Construction helpers
    // ============================================================================

    pub fn literal(value: Literal, position: impl Into<Position>) -> Self {
        Expr::Literal {
            value,
            position: position.into(),
        }
    }

    pub fn bool(value: bool, position: impl Into<Position>) -> Self {
        Expr::literal(Literal::Bool(value), position)
    }

    pub fn int(value: i64, position: impl Into<Position>) -> Self {
        Expr::literal(Literal::Int(value), position)
    }

    pub fn double(value: f64, position: impl Into<Position>) -> Self {
        Expr::literal(Literal::Double(value), position)
    }

    pub fn str(value: impl Into<String>, position: impl Into<Position>) -> Self {
        Expr::literal(Literal::Str(value.into()), position)
    }

    pub fn char(value: char, position: impl Into<Position>) -> Self {
        Expr::literal(Literal::Char(value), position)
    }

    pub fn ident(name: impl Into<String>, position: impl Into<Position>) -> Self {
        Expr::Ident {
            name: name.into(),
            position: position.into(),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr, position: impl Into<Position>) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
            position: position.into(),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr, position: impl Into<Position>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position: position.into(),
        }
    }

    pub fn paren(inner: Expr, position: impl Into<Position>) -> Self {
        Expr::Paren {
            inner: Box::new(inner),
            position: position.into(),
        }
    }

    pub fn selector(target: Expr, name: impl Into<String>, position: impl Into<Position>) -> Self {
        Expr::Selector {
            target: Box::new(target),
            name: name.into(),
            position: position.into(),
        }
    }

    pub fn call(callee: Expr, args: impl IntoIterator<Item = Expr>, position: impl Into<Position>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args: args.into_iter().collect(),
            position: position.into(),
        }
    }

    pub fn unsupported(kind: UnsupportedKind, position: impl Into<Position>) -> Self {
        Expr::Unsupported {
            kind,
            position: position.into(),
        }
    }
}
