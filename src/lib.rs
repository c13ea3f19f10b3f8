//! Gavel - compile Go expressions against host-declared types
//!
//! # Overview
//!
//! Gavel takes a single Go expression, checks it against a table of static
//! types supplied by the host, and produces a compiled expression that can be
//! evaluated any number of times against tables of concrete values. Common
//! use cases include:
//!
//! - Request filters and routing rules
//! - Feature flags and conditional logic
//! - Validation predicates over host objects
//!
//! # Quick Start
//!
//! ```
//! use gavel::{compile, TypeTable, ValueTable, Type, Value};
//!
//! let mut types = TypeTable::new();
//! types.insert("x", Type::Int).unwrap();
//!
//! let expr = compile("(5 + x) * 3", &types).unwrap();
//! assert_eq!(expr.ty(), &Type::Int);
//!
//! let mut values = ValueTable::new();
//! values.insert("x", Value::Int(2)).unwrap();
//! assert_eq!(expr.run(&values).unwrap(), Value::Int(21));
//! ```
//!
//! # Host functions and objects
//!
//! Functions are registered as [`NativeFunction`]s with an explicit
//! [`Signature`]. Objects implement [`Object`] and describe themselves with a
//! [`StructType`]; [`Record`] covers the common case.
//!
//! ```
//! use std::sync::Arc;
//! use gavel::{evaluate, NativeFunction, Record, Returns, Signature, StructType, Type, Value, ValueTable};
//!
//! let get = NativeFunction::new(
//!     Signature::new([Type::String], Returns::Single(Type::String)),
//!     |_| Ok(Value::str("application/json")),
//! );
//! let header_ty = Arc::new(StructType::new("Header").with_method(
//!     "Get",
//!     Signature::new([Type::String], Returns::Single(Type::String)),
//! ));
//! let header = Record::new(header_ty).with_method("Get", get);
//!
//! let values = ValueTable::from_entries([("header", Value::object(header))]).unwrap();
//! let result = evaluate("header.Get(\"Content-Type\") == \"application/json\"", &values);
//! assert_eq!(result.unwrap(), Value::Bool(true));
//! ```

mod error;
mod error_renderer;

pub use error::Error;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export the building blocks from gavel_core
pub use gavel_core::{api, builder, evaluator, symbols, syntax, types, values};
pub use gavel_core::{
    BuildError, BuildErrorKind, CompilationOptions, CompiledExpression, ExecutionError,
    ExecutionErrorKind, build, build_with_options,
};

// Re-export commonly used types and values
pub use gavel_core::symbols::{DuplicateSymbol, SymbolTable, TypeTable, ValueTable};
pub use gavel_core::types::{Member, Returns, Signature, StructType, Type};
pub use gavel_core::values::{Function, FunctionError, NativeFunction, Object, Record, Value};

// Re-export the parser
pub use gavel_parser::{ParseError, ParseErrorKind, parse, parse_with_max_depth};

/// Parse and build `source` against `types` with default options.
pub fn compile(source: &str, types: &TypeTable) -> Result<CompiledExpression, Error> {
    compile_with_options(source, types, CompilationOptions::default())
}

/// Parse and build `source` against `types`.
pub fn compile_with_options(
    source: &str,
    types: &TypeTable,
    options: CompilationOptions,
) -> Result<CompiledExpression, Error> {
    let expr = parse_with_max_depth(source, options.max_depth)?;
    Ok(build_with_options(types, &expr, options)?)
}

/// Compile `source` against the types of `values` and run it once.
pub fn evaluate(source: &str, values: &ValueTable) -> Result<Value, Error> {
    let compiled = compile(source, &values.types())?;
    Ok(compiled.run(values)?)
}
