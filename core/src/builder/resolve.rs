//! Member and call resolution.
//!
//! Build time works on type descriptors, run time on values. Both halves live
//! here so a selector or a call is resolved the same way in each phase.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    evaluator::{ExecutionError, ExecutionErrorKind},
    syntax::Position,
    types::{Member, Signature, Type},
    values::{Function, Value},
};

/// What a selector reads, as fixed at build time.
#[derive(Debug, Clone)]
pub enum MemberAccess {
    Field(Type),
    Method(Arc<Signature>),
}

impl MemberAccess {
    pub fn ty(&self) -> Type {
        match self {
            MemberAccess::Field(ty) => ty.clone(),
            MemberAccess::Method(signature) => Type::Callable(Arc::clone(signature)),
        }
    }
}

impl From<Member<'_>> for MemberAccess {
    fn from(member: Member<'_>) -> Self {
        match member {
            Member::Field(ty) => MemberAccess::Field(ty.clone()),
            Member::Method(signature) => MemberAccess::Method(Arc::clone(signature)),
        }
    }
}

// ============================================================================
// Build time
// ============================================================================

/// The member `name` of `ty`, if `ty` is structured and declares it.
pub fn member(ty: &Type, name: &str) -> Option<MemberAccess> {
    ty.as_struct()?.member(name).map(MemberAccess::from)
}

/// The signature of `ty`, if `ty` is callable.
pub fn callable(ty: &Type) -> Option<&Arc<Signature>> {
    ty.as_signature()
}

// ============================================================================
// Run time
// ============================================================================

/// Read the member selected at build time from an object value.
pub fn read_member(
    target: &Value,
    name: &str,
    access: &MemberAccess,
    position: Position,
) -> Result<Value, ExecutionError> {
    let Value::Object(object) = target else {
        return Err(ExecutionError::new(
            ExecutionErrorKind::OperandMismatch { op: ".".into() },
            position,
        ));
    };

    let value = match access {
        MemberAccess::Field(_) => object.field(name),
        MemberAccess::Method(_) => object.method(name).map(Value::Function),
    };
    match value {
        Some(value) if value.conforms_to(&access.ty()) => Ok(value),
        _ => Err(ExecutionError::new(
            ExecutionErrorKind::UnboundMember {
                name: name.to_string(),
                type_name: object.ty().name().to_string(),
            },
            position,
        )),
    }
}

/// Call `function` with already evaluated arguments.
///
/// A failure of a `ValueWithFailure` function becomes `FunctionFailed`; a
/// failure of a `Single` function breaks its signature and becomes
/// `UndeclaredFailure`. A result that does not match the signature the call
/// was built against becomes `UnexpectedResultType`.
pub fn invoke(
    function: &Arc<dyn Function>,
    name: &str,
    signature: &Signature,
    args: &[Value],
    position: Position,
) -> Result<Value, ExecutionError> {
    trace!(function = name, args = args.len(), "invoking host function");
    let result = function.call(args).map_err(|source| {
        let name = name.to_string();
        let kind = if signature.returns().can_fail() {
            trace!(function = %name, error = %source, "host function failed");
            ExecutionErrorKind::FunctionFailed { name, source }
        } else {
            debug!(function = %name, error = %source, "host function failed without declaring an error result");
            ExecutionErrorKind::UndeclaredFailure { name, source }
        };
        ExecutionError::new(kind, position)
    })?;

    let expected = signature.returns().ty();
    if !result.conforms_to(expected) {
        return Err(ExecutionError::new(
            ExecutionErrorKind::UnexpectedResultType {
                name: name.to_string(),
                expected: expected.to_string(),
                found: result.ty().to_string(),
            },
            position,
        ));
    }
    Ok(result)
}
