//! Go expression syntax for Gavel.
//!
//! [`parse`] turns source text into a [`gavel_core::syntax::Expr`] tree whose
//! positions are 1-based byte offsets into that text. Everything Go can write
//! in an expression is recognized; forms the compiler does not support (index
//! and slice expressions, type assertions, function literals, dereferences)
//! become `Unsupported` nodes so the builder can report them with a position.
//!
//! ```
//! use gavel_parser::parse;
//!
//! let expr = parse("req.Method == \"GET\"").unwrap();
//! assert_eq!(expr.to_string(), "req.Method == \"GET\"");
//! assert_eq!(expr.position().0, 12);
//! ```

mod error;
mod literal;
mod nesting;
mod parser;



pub use error::{ParseError, ParseErrorKind};
pub use literal::UnescapeError;
pub use nesting::DEFAULT_MAX_DEPTH;
pub use parser::{ExpressionParser, Rule, parse, parse_with_max_depth};
