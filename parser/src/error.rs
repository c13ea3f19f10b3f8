use gavel_core::syntax::Position;
use pest::error::{ErrorVariant, InputLocation};
use thiserror::Error;

use crate::{Rule, literal::UnescapeError};

/// A syntax error with the location it was detected at.
///
/// Displays as `line:column: message`, with both counted from 1 and the
/// column counted in bytes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{line}:{column}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("string literal not terminated")]
    UnterminatedString,

    #[error("raw string literal not terminated")]
    UnterminatedRawString,

    #[error("rune literal not terminated")]
    UnterminatedChar,

    #[error("invalid number literal: {text}")]
    InvalidNumber { text: String },

    #[error("expression nesting exceeds maximum depth of {max_depth}")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    #[error(transparent)]
    Literal(#[from] UnescapeError),

    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    /// Create an error at byte `offset` of `source`.
    pub fn new(kind: ParseErrorKind, source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = offset - before.rfind('\n').map_or(0, |nl| nl + 1) + 1;
        Self {
            kind,
            position: Position::from_offset(offset),
            line,
            column,
        }
    }
}

/// Convert a pest error into a [`ParseError`] phrased after the Go scanner.
pub(crate) fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    let offset = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, offset),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, offset)
}

fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.contains(&Rule::EOI) {
        return "'EOF'".to_string();
    }

    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = match rule {
            Rule::ident => "identifier",
            Rule::call | Rule::paren_group => "'('",
            Rule::grouped
            | Rule::int
            | Rule::float
            | Rule::string
            | Rule::raw_string
            | Rule::char_lit
            | Rule::func_lit
            | Rule::unterminated_string
            | Rule::unterminated_raw_string
            | Rule::unterminated_char
            | Rule::not
            | Rule::neg
            | Rule::plus
            | Rule::complement
            | Rule::address
            | Rule::receive
            | Rule::deref => "operand",
            _ => "operator",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    // An identifier is one kind of operand.
    if concepts.contains(&"operand") {
        concepts.retain(|concept| *concept != "identifier");
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Text of the token at `offset`: identifiers and numbers bare, anything else
/// quoted.
fn describe_found(source: &str, offset: usize) -> String {
    let rest = source.get(offset..).unwrap_or_default();
    let Some(first) = rest.chars().next() else {
        return "'EOF'".to_string();
    };
    if first.is_alphanumeric() || first == '_' {
        rest.chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect()
    } else {
        format!("'{}'", first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_column() {
        let source = "a +\n  b $";
        let err = ParseError::new(ParseErrorKind::UnterminatedString, source, 8);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 5);
        assert_eq!(err.position, Position(9));
        assert_eq!(err.to_string(), "2:5: string literal not terminated");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let err = ParseError::new(ParseErrorKind::UnterminatedChar, "ab", 10);
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_describe_found() {
        assert_eq!(describe_found("5x + 1", 1), "x");
        assert_eq!(describe_found("5 )", 2), "')'");
        assert_eq!(describe_found("5 +", 3), "'EOF'");
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[Rule::add, Rule::EOI]), "'EOF'");
        assert_eq!(format_expected_rules(&[Rule::int, Rule::ident]), "operand");
        assert_eq!(format_expected_rules(&[Rule::paren_group, Rule::ident]), "'(' or identifier");
        assert_eq!(format_expected_rules(&[]), "something else");
        assert_eq!(
            format_expected_rules(&[Rule::add, Rule::call, Rule::grouped]),
            "operator, '(' or operand"
        );
    }
}
