//! Compiled expressions.

use std::sync::Arc;

use tracing::trace;

use crate::{
    evaluator::{Evaluator, ExecutionError},
    symbols::ValueTable,
    types::Type,
    values::Value,
};

type SharedEvaluator = Arc<dyn Fn(&ValueTable) -> Result<Value, ExecutionError> + Send + Sync>;

/// A built expression ready for execution.
///
/// Holds the static result type and the evaluator closure. Cloning is cheap
/// (the closure is shared), running never mutates it, and a compiled
/// expression may be run from several threads at once.
///
/// # Example
///
/// ```
/// use gavel_core::{build, symbols::{TypeTable, ValueTable}, syntax::Expr, types::Type, values::Value};
///
/// let mut types = TypeTable::new();
/// types.insert("x", Type::Int).unwrap();
/// let compiled = build(&types, &Expr::ident("x", 1)).unwrap();
/// assert_eq!(compiled.ty(), &Type::Int);
///
/// let mut values = ValueTable::new();
/// values.insert("x", Value::Int(2)).unwrap();
/// assert_eq!(compiled.run(&values).unwrap(), Value::Int(2));
/// ```
#[derive(Clone)]
pub struct CompiledExpression {
    ty: Type,
    eval: SharedEvaluator,
}

impl CompiledExpression {
    pub(crate) fn new(ty: Type, eval: Evaluator) -> Self {
        Self {
            ty,
            eval: Arc::from(eval),
        }
    }

    /// The static type of every value this expression produces.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Evaluate against `values`.
    ///
    /// `values` must bind every name of the type table the expression was
    /// built with, to a value of the declared type; a missing or mistyped
    /// binding is reported as `UnboundIdentifier`. A failed run leaves the
    /// expression usable.
    pub fn run(&self, values: &ValueTable) -> Result<Value, ExecutionError> {
        let result = (self.eval)(values);
        if let Err(err) = &result {
            trace!(error = %err, position = %err.position, "evaluation failed");
        }
        result
    }
}

impl core::fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}
