//! Configuration options for building expressions.

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use gavel_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 64 };
/// assert_eq!(CompilationOptions::default().max_depth, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Maximum nesting depth of the expression tree.
    ///
    /// Deeper trees are rejected with `ExpressionTooDeep` instead of
    /// overflowing the stack while building or running.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}
