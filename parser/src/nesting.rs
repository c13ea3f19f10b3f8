//! Nesting limit enforced before the grammar runs.
//!
//! Bracketed groups and prefix operators recurse in both the pest grammar and
//! the Pratt parser, so deeply nested input would exhaust the stack before a
//! tree exists. A lexical scan bounds that nesting first. The depth it counts
//! never exceeds the depth of the tree the parser would build, so anything
//! the builder accepts under the same limit also passes here.

use crate::error::{ParseError, ParseErrorKind};

/// Nesting limit applied by [`parse`](crate::parse).
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Reject `source` if brackets and prefix operators nest deeper than
/// `max_depth` nodes.
///
/// Malformed input is left to the grammar: unterminated literals and comments
/// simply end the scan.
pub(crate) fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let bytes = source.as_bytes();
    let check = |depth: usize, offset: usize| {
        if depth > max_depth {
            Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                source,
                offset,
            ))
        } else {
            Ok(())
        }
    };

    // Depth of the innermost open bracket, and those enclosing it.
    let mut base = 0;
    let mut enclosing = Vec::new();
    // Prefix operators applied to the operand being scanned.
    let mut prefixes = 0;
    let mut expect_operand = true;

    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = find(bytes, i + 2, b"\n").map_or(bytes.len(), |end| end + 1);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                match find(bytes, i + 2, b"*/") {
                    Some(end) => i = end + 2,
                    None => return Ok(()),
                }
                continue;
            }
            b'(' | b'[' | b'{' => {
                let depth = base + prefixes + 1;
                check(depth, start)?;
                enclosing.push(base);
                base = depth;
                prefixes = 0;
                expect_operand = true;
                i += 1;
                continue;
            }
            b')' | b']' | b'}' => {
                base = enclosing.pop().unwrap_or(0);
                prefixes = 0;
                expect_operand = false;
                i += 1;
                continue;
            }
            b',' | b':' | b';' => {
                prefixes = 0;
                expect_operand = true;
                i += 1;
                continue;
            }
            quote @ (b'"' | b'\'') => i = skip_quoted(bytes, i, quote),
            b'`' => i = find(bytes, i + 1, b"`").map_or(bytes.len(), |end| end + 1),
            b'0'..=b'9' => i = skip_number(bytes, i),
            b'.' if expect_operand && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                i = skip_number(bytes, i)
            }
            b if is_ident_byte(b) => {
                while i < bytes.len() && is_ident_byte(bytes[i]) {
                    i += 1;
                }
            }
            _ if expect_operand => {
                prefixes += 1;
                check(base + prefixes, start)?;
                i += if bytes[i..].starts_with(b"<-") { 2 } else { 1 };
                continue;
            }
            _ => {
                // Infix operator or selector dot.
                i += operator_len(&bytes[i..]);
                prefixes = 0;
                expect_operand = true;
                continue;
            }
        }

        // An operand ended at `i`.
        check(base + prefixes + 1, start)?;
        prefixes = 0;
        expect_operand = false;
    }

    Ok(())
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        let b = bytes[i];
        let exponent_sign = matches!(b, b'+' | b'-')
            && matches!(bytes[i - 1], b'e' | b'E' | b'p' | b'P');
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || exponent_sign {
            i += 1;
        } else {
            break;
        }
    }
    i
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn operator_len(rest: &[u8]) -> usize {
    const TWO_BYTE: [&[u8]; 9] = [b"||", b"&&", b"&^", b"==", b"!=", b"<<", b">>", b"<=", b">="];
    if TWO_BYTE.iter().any(|op| rest.starts_with(op)) {
        2
    } else {
        1
    }
}
