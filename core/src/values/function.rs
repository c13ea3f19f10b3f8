//! Host functions callable from expressions.
//!
//! Free functions and the methods of host objects are both exposed through the
//! [`Function`] trait, so the evaluator invokes them the same way.

use std::sync::Arc;

use thiserror::Error;

use super::dynamic::Value;
use crate::types::Signature;

/// Failure reported by a host function.
///
/// Its message is surfaced verbatim by
/// [`ExecutionErrorKind::FunctionFailed`](crate::evaluator::ExecutionErrorKind::FunctionFailed),
/// and the wrapped error stays reachable through `source()`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FunctionError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>);

impl FunctionError {
    pub fn new(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(error.into())
    }

    pub fn message(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

/// Trait for callable host values.
///
/// The evaluator only calls a function with arguments whose count and types
/// match [`Function::signature`]; implementations may rely on that.
pub trait Function: Send + Sync {
    fn signature(&self) -> &Arc<Signature>;

    /// Call the function.
    ///
    /// An `Err` aborts the evaluation. Functions declared with
    /// [`Returns::ValueWithFailure`](crate::types::Returns::ValueWithFailure)
    /// fail with `FunctionFailed`; any other function failing is reported as
    /// `UndeclaredFailure`.
    fn call(&self, args: &[Value]) -> Result<Value, FunctionError>;
}

/// Type alias for the closures wrapped by [`NativeFunction`].
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, FunctionError> + Send + Sync;

/// Wrapper for native Rust closures.
///
/// # Example
///
/// ```
/// use gavel_core::types::{Returns, Signature, Type};
/// use gavel_core::values::{NativeFunction, Value};
///
/// let sum = NativeFunction::new(
///     Signature::new([Type::Int, Type::Int], Returns::Single(Type::Int)),
///     |args| match args {
///         [Value::Int(x), Value::Int(y)] => Ok(Value::Int(x + y)),
///         _ => unreachable!("checked by the builder"),
///     },
/// );
/// let value = Value::function(sum);
/// ```
pub struct NativeFunction {
    signature: Arc<Signature>,
    func: Box<NativeFn>,
}

impl NativeFunction {
    pub fn new(
        signature: Signature,
        func: impl Fn(&[Value]) -> Result<Value, FunctionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            signature: Arc::new(signature),
            func: Box::new(func),
        }
    }
}

impl Function for NativeFunction {
    fn signature(&self) -> &Arc<Signature> {
        &self.signature
    }

    fn call(&self, args: &[Value]) -> Result<Value, FunctionError> {
        (self.func)(args)
    }
}

impl core::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NativeFunction")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
