//! Run-time half of a compiled expression.
//!
//! The builder turns every node of a tree into an [`Evaluator`] closure built
//! from the constructors in this module. Running the root closure against a
//! [`ValueTable`](crate::symbols::ValueTable) performs the computation.
//!
//! ## Design Principles
//!
//! - **Never panic**: host data that breaks the build-time contract is
//!   reported as an [`ExecutionError`], never trusted blindly.
//! - **No re-validation**: operator and call types were fixed by the builder;
//!   the closures only check what crosses the host boundary.
//! - **Stateless**: closures hold no mutable state and may run concurrently.

mod error;
pub(crate) mod eval;
pub mod operators;


pub use error::{ExecutionError, ExecutionErrorKind};
pub use eval::Evaluator;
