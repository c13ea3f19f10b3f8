//! Builds expression trees into [`CompiledExpression`]s.
//!
//! The builder walks the tree once. It resolves identifiers against the type
//! table, selectors and calls against type descriptors, and operators against
//! the operator table, then emits one evaluator closure per node. Nothing is
//! evaluated while building.

mod build;
mod error;
pub mod resolve;


pub use error::{BuildError, BuildErrorKind};

use tracing::debug;

use crate::{
    api::{CompilationOptions, CompiledExpression},
    symbols::TypeTable,
    syntax::Expr,
};

/// Build `expr` against `types` with default options.
pub fn build(types: &TypeTable, expr: &Expr) -> Result<CompiledExpression, BuildError> {
    build_with_options(types, expr, CompilationOptions::default())
}

/// Build `expr` against `types`.
pub fn build_with_options(
    types: &TypeTable,
    expr: &Expr,
    options: CompilationOptions,
) -> Result<CompiledExpression, BuildError> {
    debug!(symbols = types.len(), max_depth = options.max_depth, "building expression");
    let built = build::Builder::new(types, options).build(expr).inspect_err(|err| {
        debug!(error = %err, "build failed");
    })?;
    debug!(ty = %built.ty, "built expression");
    Ok(CompiledExpression::new(built.ty, built.eval))
}
