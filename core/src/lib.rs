//! Core of the Gavel expression compiler.
//!
//! Gavel compiles a position-annotated expression tree against a table of
//! static types, producing a [`CompiledExpression`] that can be evaluated any
//! number of times against tables of concrete values.
//!
//! ```
//! use gavel_core::{build, symbols::{TypeTable, ValueTable}, syntax::{BinaryOp, Expr}};
//! use gavel_core::types::Type;
//! use gavel_core::values::Value;
//!
//! // 5 + x
//! let expr = Expr::binary(BinaryOp::Add, Expr::int(5, 1), Expr::ident("x", 5), 3);
//!
//! let mut types = TypeTable::new();
//! types.insert("x", Type::Int).unwrap();
//! let compiled = build(&types, &expr).unwrap();
//! assert_eq!(compiled.ty(), &Type::Int);
//!
//! let mut values = ValueTable::new();
//! values.insert("x", Value::Int(2)).unwrap();
//! assert_eq!(compiled.run(&values).unwrap(), Value::Int(7));
//! ```

pub mod api;
pub mod builder;
pub mod evaluator;
pub mod symbols;
pub mod syntax;
pub mod types;
pub mod values;

pub use api::{CompilationOptions, CompiledExpression};
pub use builder::{BuildError, BuildErrorKind, build, build_with_options};
pub use evaluator::{ExecutionError, ExecutionErrorKind};
