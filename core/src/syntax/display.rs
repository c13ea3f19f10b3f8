//! Source-like rendering of trees, used to name callees in error messages.

use core::fmt::{Display, Formatter, Result};

use super::{Expr, Literal};

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Double(value) => write!(f, "{:?}", value),
            Literal::Str(value) => write!(f, "{:?}", value),
            Literal::Char(value) => write!(f, "{:?}", value),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Literal { value, .. } => write!(f, "{}", value),
            Expr::Unary { op, operand, .. } => write!(f, "{}{}", op, operand),
            Expr::Binary {
                op, left, right, ..
            } => write!(f, "{} {} {}", left, op, right),
            Expr::Paren { inner, .. } => write!(f, "({})", inner),
            Expr::Ident { name, .. } => f.write_str(name),
            Expr::Selector { target, name, .. } => write!(f, "{}.{}", target, name),
            Expr::Call { callee, args, .. } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Unsupported { kind, .. } => write!(f, "<{}>", kind.description()),
        }
    }
}
