//! Decoding of Go literal text into values.
//!
//! The grammar only delimits literals; this module turns their text into the
//! value the tree stores. Escapes follow Go: `\a \b \f \n \r \t \v \\`, the
//! quote of the literal, `\xhh` and `\ooo` bytes, `\uhhhh` and
//! `\Uhhhhhhhh` code points.

use thiserror::Error;

/// Errors that can occur when unescaping literals.
///
/// Offsets are byte offsets into the literal's body (after the opening
/// quote).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("unknown escape sequence '{seq}'")]
    InvalidEscape { pos: usize, seq: String },

    #[error("escape sequence '{seq}' is incomplete: expected {expected} digits")]
    IncompleteEscape {
        pos: usize,
        seq: String,
        expected: usize,
    },

    #[error("escape sequence is invalid Unicode code point U+{value:X}")]
    InvalidUnicodeScalar { pos: usize, value: u32 },

    #[error("octal escape value {value} > 255")]
    OctalOutOfRange { pos: usize, value: u32 },

    #[error("literal is not valid UTF-8")]
    InvalidUtf8,

    #[error("more than one character in rune literal")]
    TooManyChars,

    #[error("empty rune literal or unescaped ' in rune literal")]
    EmptyRune,
}

impl UnescapeError {
    /// Offset of the faulty escape within the literal body.
    pub fn pos(&self) -> usize {
        match self {
            UnescapeError::InvalidEscape { pos, .. }
            | UnescapeError::IncompleteEscape { pos, .. }
            | UnescapeError::InvalidUnicodeScalar { pos, .. }
            | UnescapeError::OctalOutOfRange { pos, .. } => *pos,
            UnescapeError::InvalidUtf8 | UnescapeError::TooManyChars | UnescapeError::EmptyRune => 0,
        }
    }
}

/// Unescape the body of an interpreted literal delimited by `quote`.
pub fn unescape(body: &str, quote: char) -> Result<String, UnescapeError> {
    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            let mut buf = [0; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let Some((_, escape)) = chars.next() else {
            return Err(UnescapeError::InvalidEscape {
                pos,
                seq: "\\".to_string(),
            });
        };
        let simple = match escape {
            'a' => Some(0x07),
            'b' => Some(0x08),
            'f' => Some(0x0c),
            'n' => Some(b'\n'),
            'r' => Some(b'\r'),
            't' => Some(b'\t'),
            'v' => Some(0x0b),
            '\\' => Some(b'\\'),
            c if c == quote => Some(c as u8),
            _ => None,
        };
        if let Some(byte) = simple {
            bytes.push(byte);
            continue;
        }

        match escape {
            'x' => {
                let value = read_digits(&mut chars, body, pos, 2, 16)?;
                bytes.push(value as u8);
            }
            'u' | 'U' => {
                let digits = if escape == 'u' { 4 } else { 8 };
                let value = read_digits(&mut chars, body, pos, digits, 16)?;
                let ch = char::from_u32(value)
                    .ok_or(UnescapeError::InvalidUnicodeScalar { pos, value })?;
                let mut buf = [0; 4];
                bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            '0'..='7' => {
                // The first digit is already consumed.
                let first = escape.to_digit(8).unwrap_or(0);
                let rest = read_digits(&mut chars, body, pos, 2, 8)?;
                let value = first * 64 + rest;
                if value > 255 {
                    return Err(UnescapeError::OctalOutOfRange { pos, value });
                }
                bytes.push(value as u8);
            }
            other => {
                return Err(UnescapeError::InvalidEscape {
                    pos,
                    seq: format!("\\{}", other),
                });
            }
        }
    }

    String::from_utf8(bytes).map_err(|_| UnescapeError::InvalidUtf8)
}

fn read_digits(
    chars: &mut core::iter::Peekable<core::str::CharIndices<'_>>,
    body: &str,
    pos: usize,
    count: usize,
    radix: u32,
) -> Result<u32, UnescapeError> {
    let mut value = 0u32;
    for _ in 0..count {
        match chars.peek().and_then(|(_, c)| c.to_digit(radix)) {
            Some(digit) => {
                chars.next();
                value = value.wrapping_mul(radix).wrapping_add(digit);
            }
            None => {
                let end = chars.peek().map_or(body.len(), |(i, _)| *i);
                return Err(UnescapeError::IncompleteEscape {
                    pos,
                    seq: body[pos..end].to_string(),
                    expected: count,
                });
            }
        }
    }
    Ok(value)
}

/// Decode the body of a rune literal to its single character.
pub fn unescape_char(body: &str) -> Result<char, UnescapeError> {
    let decoded = unescape(body, '\'')?;
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(UnescapeError::EmptyRune),
        (Some(_), Some(_)) => Err(UnescapeError::TooManyChars),
    }
}

/// Body of a raw string literal. Carriage returns are discarded.
pub fn raw_string(body: &str) -> String {
    body.chars().filter(|c| *c != '\r').collect()
}

/// Parse a Go integer literal (`42`, `0x2a`, `0o52`, `052`, `0b101010`,
/// with optional `_` separators).
pub fn parse_int(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };
    i64::from_str_radix(body, radix).ok()
}

/// Parse a Go decimal floating-point literal.
pub fn parse_float(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| *c != '_').collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_plain() {
        assert_eq!(unescape("fubar", '"').unwrap(), "fubar");
        assert_eq!(unescape("héllo", '"').unwrap(), "héllo");
    }

    #[test]
    fn test_unescape_simple_escapes() {
        assert_eq!(unescape(r"a\nb\tc", '"').unwrap(), "a\nb\tc");
        assert_eq!(unescape(r#"say \"hi\""#, '"').unwrap(), "say \"hi\"");
        assert_eq!(unescape(r"back\\slash", '"').unwrap(), "back\\slash");
        assert_eq!(unescape(r"\a\b\f\v", '"').unwrap(), "\x07\x08\x0c\x0b");
    }

    #[test]
    fn test_quote_escape_depends_on_delimiter() {
        assert_eq!(unescape(r"\'", '\'').unwrap(), "'");
        assert!(matches!(
            unescape(r"\'", '"'),
            Err(UnescapeError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_unescape_numeric_escapes() {
        assert_eq!(unescape(r"\x41\101é\U0001F600", '"').unwrap(), "AAé😀");
    }

    #[test]
    fn test_unescape_errors() {
        assert_eq!(
            unescape(r"\q", '"'),
            Err(UnescapeError::InvalidEscape {
                pos: 0,
                seq: r"\q".to_string()
            })
        );
        assert!(matches!(
            unescape(r"ab\x4", '"'),
            Err(UnescapeError::IncompleteEscape { pos: 2, expected: 2, .. })
        ));
        assert!(matches!(
            unescape(r"\uD800", '"'),
            Err(UnescapeError::InvalidUnicodeScalar { value: 0xD800, .. })
        ));
        assert!(matches!(
            unescape(r"\777", '"'),
            Err(UnescapeError::OctalOutOfRange { value: 511, .. })
        ));
        assert_eq!(unescape(r"\xff", '"'), Err(UnescapeError::InvalidUtf8));
    }

    #[test]
    fn test_unescape_char() {
        assert_eq!(unescape_char("f").unwrap(), 'f');
        assert_eq!(unescape_char(r"\n").unwrap(), '\n');
        assert_eq!(unescape_char("é").unwrap(), 'é');
        assert_eq!(unescape_char("ab"), Err(UnescapeError::TooManyChars));
        assert_eq!(unescape_char(""), Err(UnescapeError::EmptyRune));
    }

    #[test]
    fn test_raw_string() {
        assert_eq!(raw_string("a\\nb"), "a\\nb");
        assert_eq!(raw_string("line\r\nnext"), "line\nnext");
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("1_000"), Some(1000));
        assert_eq!(parse_int("0x2A"), Some(42));
        assert_eq!(parse_int("0o52"), Some(42));
        assert_eq!(parse_int("052"), Some(42));
        assert_eq!(parse_int("0b101010"), Some(42));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("9223372036854775808"), None);
        assert_eq!(parse_int("09"), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("5.6"), Some(5.6));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1_000.5"), Some(1000.5));
    }
}
