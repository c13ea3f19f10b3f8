use core::fmt::Display;

use super::Type;

/// How a callable reports its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Returns {
    /// A single value.
    Single(Type),
    /// A value, or a failure that aborts the evaluation.
    ValueWithFailure(Type),
}

impl Returns {
    /// The type of the value produced on success.
    pub fn ty(&self) -> &Type {
        match self {
            Returns::Single(ty) | Returns::ValueWithFailure(ty) => ty,
        }
    }

    /// Whether the callable may report a failure instead of a value.
    pub fn can_fail(&self) -> bool {
        matches!(self, Returns::ValueWithFailure(_))
    }
}

/// Signature of a host function or method.
///
/// For variadic signatures the last parameter is the element type of the
/// variadic tail. Variadic callables can be described, but calling one is
/// always rejected by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Type>,
    variadic: bool,
    returns: Returns,
}

impl Signature {
    pub fn new(params: impl IntoIterator<Item = Type>, returns: Returns) -> Self {
        Self {
            params: params.into_iter().collect(),
            variadic: false,
            returns,
        }
    }

    pub fn variadic(params: impl IntoIterator<Item = Type>, returns: Returns) -> Self {
        Self {
            params: params.into_iter().collect(),
            variadic: true,
            returns,
        }
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn returns(&self) -> &Returns {
        &self.returns
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "func(")?;
        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if self.variadic && i == last {
                write!(f, "...")?;
            }
            write!(f, "{}", param)?;
        }
        match &self.returns {
            Returns::Single(ty) => write!(f, ") {}", ty),
            Returns::ValueWithFailure(ty) => write!(f, ") ({}, error)", ty),
        }
    }
}
