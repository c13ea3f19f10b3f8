//! The expression tree consumed by the builder.
//!
//! Trees are produced by a parser (see the `gavel-parser` crate) or built by
//! hand through the constructor helpers on [`Expr`]. Every node carries a
//! [`Position`] which ends up on any error reported against that node.

mod display;
mod expr;
mod ops;
mod position;

pub use expr::{Expr, Literal, UnsupportedKind};
pub use ops::{BinaryOp, UnaryOp};
pub use position::Position;
