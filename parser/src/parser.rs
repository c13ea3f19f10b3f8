use gavel_core::syntax::{BinaryOp, Expr, Position, UnaryOp, UnsupportedKind};
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

use crate::{
    error::{ParseError, ParseErrorKind, convert_pest_error},
    literal,
    nesting::{DEFAULT_MAX_DEPTH, check_nesting},
};

lazy_static! {
    // Note: precedence is defined lowest to highest, following Go.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::logical_or, Assoc::Left))    // `||`
        .op(Op::infix(Rule::logical_and, Assoc::Left))   // `&&`
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::ne, Assoc::Left) |
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left)
        )                                                // `==`, `!=`, `<`, `<=`, `>`, `>=`
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left) |
            Op::infix(Rule::bit_or, Assoc::Left) |
            Op::infix(Rule::bit_xor, Assoc::Left)
        )                                                // `+`, `-`, `|`, `^`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left) |
            Op::infix(Rule::shl, Assoc::Left) |
            Op::infix(Rule::shr, Assoc::Left) |
            Op::infix(Rule::bit_and, Assoc::Left) |
            Op::infix(Rule::and_not, Assoc::Left)
        )                                                // `*`, `/`, `%`, `<<`, `>>`, `&`, `&^`

        // Unary operators.
        .op(
            Op::prefix(Rule::not) |
            Op::prefix(Rule::neg) |
            Op::prefix(Rule::plus) |
            Op::prefix(Rule::complement) |
            Op::prefix(Rule::address) |
            Op::prefix(Rule::receive) |
            Op::prefix(Rule::deref)
        )

        // Postfix operators.
        .op(
            Op::postfix(Rule::type_assert) |
            Op::postfix(Rule::selector) |
            Op::postfix(Rule::call) |
            Op::postfix(Rule::slice) |
            Op::postfix(Rule::index)
        )
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "expression.pest"]
pub struct ExpressionParser;

/// A parsed node together with the byte offset its source text starts at.
///
/// Calls and unsupported postfix forms are positioned at the start of their
/// operand, which is not otherwise recoverable from the node.
type Parsed = Result<(Expr, usize), ParseError>;

/// Parse Go expression source into a position-annotated tree.
///
/// Nesting is limited to [`DEFAULT_MAX_DEPTH`].
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
///
/// Brackets and prefix operators nested deeper than `max_depth` are rejected
/// with [`ParseErrorKind::MaxDepthExceeded`] before the grammar runs.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    check_nesting(source, max_depth)?;
    let mut pairs = ExpressionParser::parse(Rule::main, source)
        .map_err(|err| convert_pest_error(err, source))?;
    let expression = pairs
        .next()
        .and_then(|main| main.into_inner().next())
        .ok_or_else(|| missing(source, 0, "expression"))?;
    parse_expression(expression, source).map(|(expr, _)| expr)
}

fn parse_expression(pair: Pair<Rule>, source: &str) -> Parsed {
    PRATT_PARSER
        .map_primary(|primary| parse_primary(primary, source))
        .map_prefix(|op, rhs| {
            let (operand, _) = rhs?;
            let start = op.as_span().start();
            let position = Position::from_offset(start);
            let expr = match op.as_rule() {
                Rule::deref => Expr::unsupported(UnsupportedKind::Dereference, position),
                rule => {
                    let op = unary_op(rule).ok_or_else(|| unexpected(&op, source))?;
                    Expr::unary(op, operand, position)
                }
            };
            Ok((expr, start))
        })
        .map_infix(|lhs, op, rhs| {
            let (left, start) = lhs?;
            let (right, _) = rhs?;
            let binary = binary_op(op.as_rule()).ok_or_else(|| unexpected(&op, source))?;
            let position = Position::from_offset(op.as_span().start());
            Ok((Expr::binary(binary, left, right, position), start))
        })
        .map_postfix(|lhs, op| {
            let (target, start) = lhs?;
            let expr = match op.as_rule() {
                Rule::selector => {
                    let name = op
                        .into_inner()
                        .next()
                        .ok_or_else(|| missing(source, start, "selector name"))?;
                    let position = Position::from_offset(name.as_span().start());
                    Expr::selector(target, name.as_str(), position)
                }
                Rule::call => {
                    let args = op
                        .into_inner()
                        .map(|arg| parse_expression(arg, source).map(|(expr, _)| expr))
                        .collect::<Result<Vec<_>, _>>()?;
                    Expr::call(target, args, Position::from_offset(start))
                }
                Rule::type_assert => {
                    Expr::unsupported(UnsupportedKind::TypeAssertion, Position::from_offset(start))
                }
                Rule::slice => Expr::unsupported(UnsupportedKind::Slice, Position::from_offset(start)),
                Rule::index => Expr::unsupported(UnsupportedKind::Index, Position::from_offset(start)),
                _ => return Err(unexpected(&op, source)),
            };
            Ok((expr, start))
        })
        .parse(pair.into_inner())
}

fn parse_primary(pair: Pair<Rule>, source: &str) -> Parsed {
    let start = pair.as_span().start();
    let position = Position::from_offset(start);

    let expr = match pair.as_rule() {
        Rule::grouped => {
            let inner = pair
                .into_inner()
                .next()
                .ok_or_else(|| missing(source, start, "expression"))?;
            let (inner, _) = parse_expression(inner, source)?;
            Expr::paren(inner, position)
        }
        Rule::ident => match pair.as_str() {
            "true" => Expr::bool(true, position),
            "false" => Expr::bool(false, position),
            name => Expr::ident(name, position),
        },
        Rule::int => {
            let value = literal::parse_int(pair.as_str()).ok_or_else(|| {
                invalid_number(pair.as_str(), source, start)
            })?;
            Expr::int(value, position)
        }
        Rule::float => {
            let value = literal::parse_float(pair.as_str()).ok_or_else(|| {
                invalid_number(pair.as_str(), source, start)
            })?;
            Expr::double(value, position)
        }
        Rule::string => {
            let body = inner_str(pair);
            let value = literal::unescape(body, '"')
                .map_err(|err| literal_error(err, source, start))?;
            Expr::str(value, position)
        }
        Rule::raw_string => Expr::str(literal::raw_string(inner_str(pair)), position),
        Rule::char_lit => {
            let value = literal::unescape_char(inner_str(pair))
                .map_err(|err| literal_error(err, source, start))?;
            Expr::char(value, position)
        }
        Rule::func_lit => Expr::unsupported(UnsupportedKind::FunctionLiteral, position),
        Rule::unterminated_string => {
            return Err(ParseError::new(ParseErrorKind::UnterminatedString, source, start));
        }
        Rule::unterminated_raw_string => {
            return Err(ParseError::new(ParseErrorKind::UnterminatedRawString, source, start));
        }
        Rule::unterminated_char => {
            return Err(ParseError::new(ParseErrorKind::UnterminatedChar, source, start));
        }
        _ => return Err(unexpected(&pair, source)),
    };

    Ok((expr, start))
}

fn unary_op(rule: Rule) -> Option<UnaryOp> {
    Some(match rule {
        Rule::not => UnaryOp::Not,
        Rule::neg => UnaryOp::Neg,
        Rule::plus => UnaryOp::Plus,
        Rule::complement => UnaryOp::Complement,
        Rule::address => UnaryOp::Address,
        Rule::receive => UnaryOp::Receive,
        _ => return None,
    })
}

fn binary_op(rule: Rule) -> Option<BinaryOp> {
    Some(match rule {
        Rule::add => BinaryOp::Add,
        Rule::sub => BinaryOp::Sub,
        Rule::mul => BinaryOp::Mul,
        Rule::div => BinaryOp::Div,
        Rule::rem => BinaryOp::Rem,
        Rule::bit_and => BinaryOp::BitAnd,
        Rule::bit_or => BinaryOp::BitOr,
        Rule::bit_xor => BinaryOp::BitXor,
        Rule::shl => BinaryOp::Shl,
        Rule::shr => BinaryOp::Shr,
        Rule::and_not => BinaryOp::AndNot,
        Rule::logical_and => BinaryOp::LogicalAnd,
        Rule::logical_or => BinaryOp::LogicalOr,
        Rule::eq => BinaryOp::Eq,
        Rule::ne => BinaryOp::Ne,
        Rule::lt => BinaryOp::Lt,
        Rule::le => BinaryOp::Le,
        Rule::gt => BinaryOp::Gt,
        Rule::ge => BinaryOp::Ge,
        _ => return None,
    })
}

/// Text between a literal's delimiters.
fn inner_str<'i>(pair: Pair<'i, Rule>) -> &'i str {
    pair.into_inner().next().map_or("", |inner| inner.as_str())
}

fn literal_error(err: literal::UnescapeError, source: &str, start: usize) -> ParseError {
    // Escape offsets are relative to the body, one byte past the opening quote.
    let offset = start + 1 + err.pos();
    ParseError::new(ParseErrorKind::Literal(err), source, offset)
}

fn invalid_number(text: &str, source: &str, start: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidNumber {
            text: text.to_string(),
        },
        source,
        start,
    )
}

fn unexpected(pair: &Pair<Rule>, source: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("unexpected {:?} in expression", pair.as_rule()),
        },
        source,
        pair.as_span().start(),
    )
}

fn missing(source: &str, offset: usize, what: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("missing {}", what),
        },
        source,
        offset,
    )
}
