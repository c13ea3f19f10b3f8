use core::fmt::Display;
use std::sync::Arc;

use super::{Signature, StructType};

/// Static type of an expression or symbol.
///
/// Types are compared structurally and never coerced: an `Int` is not
/// assignable to a `Double`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    // Primitives.
    Bool,
    Int,
    Double,
    String,

    // Host-provided structured values (fields and methods).
    Structured(Arc<StructType>),

    // Host-provided functions.
    Callable(Arc<Signature>),
}

impl Type {
    pub fn structured(ty: StructType) -> Self {
        Type::Structured(Arc::new(ty))
    }

    pub fn callable(signature: Signature) -> Self {
        Type::Callable(Arc::new(signature))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Bool | Type::Int | Type::Double | Type::String)
    }

    /// Whether a value of type `self` may be used where `target` is expected.
    pub fn is_assignable_to(&self, target: &Type) -> bool {
        match (self, target) {
            (Type::Structured(a), Type::Structured(b)) => Arc::ptr_eq(a, b) || a == b,
            (Type::Callable(a), Type::Callable(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => self == target,
        }
    }

    pub fn as_struct(&self) -> Option<&Arc<StructType>> {
        match self {
            Type::Structured(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_signature(&self) -> Option<&Arc<Signature>> {
        match self {
            Type::Callable(signature) => Some(signature),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Int => write!(f, "int"),
            Type::Double => write!(f, "double"),
            Type::String => write!(f, "string"),
            Type::Structured(ty) => write!(f, "{}", ty.name()),
            Type::Callable(signature) => write!(f, "{}", signature),
        }
    }
}
