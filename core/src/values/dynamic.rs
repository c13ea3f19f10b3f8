use std::sync::Arc;

use crate::{
    types::Type,
    values::{Function, Object},
};

/// A runtime value.
///
/// The type of a value is always derivable from its payload (see
/// [`Value::ty`]). Values are immutable; cloning is cheap since strings and
/// host handles are reference counted.
#[derive(Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(Arc<str>),
    Object(Arc<dyn Object>),
    Function(Arc<dyn Function>),
}

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn str(value: impl Into<Arc<str>>) -> Self {
        Value::Str(value.into())
    }

    pub fn object(object: impl Object + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn function(function: impl Function + 'static) -> Self {
        Value::Function(Arc::new(function))
    }

    // ============================================================================
    // Inspection
    // ============================================================================

    /// The type described by this value's payload.
    pub fn ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Double(_) => Type::Double,
            Value::Str(_) => Type::String,
            Value::Object(object) => Type::Structured(Arc::clone(object.ty())),
            Value::Function(function) => Type::Callable(Arc::clone(function.signature())),
        }
    }

    /// Whether this value may stand where `ty` is expected.
    ///
    /// Equivalent to `self.ty().is_assignable_to(ty)` without building the type.
    pub fn conforms_to(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Value::Bool(_), Type::Bool)
            | (Value::Int(_), Type::Int)
            | (Value::Double(_), Type::Double)
            | (Value::Str(_), Type::String) => true,
            (Value::Object(object), Type::Structured(expected)) => {
                Arc::ptr_eq(object.ty(), expected) || **object.ty() == **expected
            }
            (Value::Function(function), Type::Callable(expected)) => {
                Arc::ptr_eq(function.signature(), expected) || **function.signature() == **expected
            }
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn Object>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Arc<dyn Function>> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// Primitives compare by value (doubles with IEEE-754 semantics), host
/// handles by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Value::Function(a), Value::Function(b)) => {
                core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl core::fmt::Debug for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "Bool({value})"),
            Value::Int(value) => write!(f, "Int({value})"),
            Value::Double(value) => write!(f, "Double({value:?})"),
            Value::Str(value) => write!(f, "Str({value:?})"),
            Value::Object(object) => write!(f, "Object({})", object.ty().name()),
            Value::Function(function) => write!(f, "Function({})", function.signature()),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Double(value) => format_double(f, *value),
            Value::Str(value) => write!(f, "{:?}", value),
            Value::Object(object) => write!(f, "<{}>", object.ty().name()),
            Value::Function(function) => write!(f, "<{}>", function.signature()),
        }
    }
}

/// Format a double so that it always reads as a double (`2.0`, not `2`).
fn format_double(f: &mut core::fmt::Formatter<'_>, value: f64) -> core::fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "+Inf")
        } else {
            write!(f, "-Inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.0", s)
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into())
    }
}
