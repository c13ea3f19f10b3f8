//! Public API for compiled expressions.
//!
//! Building happens once, against a [`TypeTable`](crate::symbols::TypeTable);
//! the resulting [`CompiledExpression`] is then run any number of times
//! against [`ValueTable`](crate::symbols::ValueTable)s.
//!
//! # Example
//!
//! ```
//! use gavel_core::api::CompilationOptions;
//! use gavel_core::builder::build_with_options;
//! use gavel_core::symbols::{TypeTable, ValueTable};
//! use gavel_core::syntax::{BinaryOp, Expr};
//! use gavel_core::values::Value;
//!
//! // (5 + 2) * 3
//! let expr = Expr::binary(
//!     BinaryOp::Mul,
//!     Expr::paren(Expr::binary(BinaryOp::Add, Expr::int(5, 2), Expr::int(2, 6), 4), 1),
//!     Expr::int(3, 11),
//!     9,
//! );
//! let compiled = build_with_options(&TypeTable::new(), &expr, CompilationOptions::default()).unwrap();
//! assert_eq!(compiled.run(&ValueTable::new()).unwrap(), Value::Int(21));
//! ```

pub mod expression;
pub mod options;

pub use expression::CompiledExpression;
pub use options::CompilationOptions;
