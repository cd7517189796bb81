//! Array literal parser.
//!
//! A character scanner over the server's array output syntax: braces for
//! dimensions, double quotes with backslash escapes around elements that
//! need them, the unquoted token `NULL` for null elements, and a
//! type-specific delimiter between elements. Element text is handed to a
//! caller-supplied transform, so one scanner serves every element type.
//! A leading `[lo:hi]=` dimension prefix, printed for arrays with a
//! non-default lower bound, is skipped.

use crate::error::DecodeError;
use crate::value::PgValue;

/// Most dimensions one literal may nest. The server itself allows six;
/// anything deeper than this is rejected instead of parsed.
pub const MAX_DIMENSIONS: usize = 64;

/// Parses an array literal, decoding each element with `transform`.
///
/// Unquoted `NULL` elements become [`PgValue::Null`] without consulting
/// the transform; nested braces become nested [`PgValue::Array`] values.
/// Fails if the literal is malformed (unbalanced braces, nesting past
/// [`MAX_DIMENSIONS`]) or if the transform rejects any element.
pub fn parse_array<F>(
    source: &str,
    transform: F,
    delimiter: char,
) -> Result<Vec<PgValue>, DecodeError>
where
    F: Fn(&str) -> Result<PgValue, DecodeError>,
{
    let mut parser = ArrayParser {
        source,
        chars: source.chars().collect(),
        position: 0,
        transform: &transform,
        delimiter,
    };
    parser.parse(0)
}

struct Scanned {
    value: char,
    escaped: bool,
}

struct ArrayParser<'a, F> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
    transform: &'a F,
    delimiter: char,
}

impl<F> ArrayParser<'_, F>
where
    F: Fn(&str) -> Result<PgValue, DecodeError>,
{
    fn is_eof(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn next_character(&mut self) -> Scanned {
        let value = self.chars[self.position];
        self.position += 1;
        if value == '\\' && self.position < self.chars.len() {
            let escaped = self.chars[self.position];
            self.position += 1;
            Scanned {
                value: escaped,
                escaped: true,
            }
        } else {
            Scanned {
                value,
                escaped: false,
            }
        }
    }

    /// Skips a leading `[lo:hi]=` dimension prefix up to and including
    /// the equals sign.
    fn consume_dimensions(&mut self) {
        if self.chars.first() == Some(&'[') {
            while !self.is_eof() {
                if self.next_character().value == '=' {
                    break;
                }
            }
        }
    }

    fn push_entry(
        &self,
        entries: &mut Vec<PgValue>,
        recorded: &mut String,
        include_empty: bool,
    ) -> Result<(), DecodeError> {
        if recorded.is_empty() && !include_empty {
            return Ok(());
        }
        let text = std::mem::take(recorded);
        // Only the unquoted NULL token is the SQL null; a quoted "NULL"
        // is a four-character string.
        if text == "NULL" && !include_empty {
            entries.push(PgValue::Null);
        } else {
            entries.push((self.transform)(&text)?);
        }
        Ok(())
    }

    fn unbalanced(&self) -> DecodeError {
        DecodeError::UnbalancedArray(self.source.to_string())
    }

    /// `depth` is the brace nesting level, bounded by
    /// [`MAX_DIMENSIONS`].
    fn parse(&mut self, depth: usize) -> Result<Vec<PgValue>, DecodeError> {
        if depth >= MAX_DIMENSIONS {
            return Err(DecodeError::ArrayTooDeep(MAX_DIMENSIONS));
        }
        let nested = depth > 0;
        if !nested {
            self.consume_dimensions();
        }
        let mut entries = Vec::new();
        let mut recorded = String::new();
        let mut quote = false;
        // A nested call enters with its opening brace already consumed.
        let mut dimension = u32::from(nested);

        while !self.is_eof() {
            let ch = self.next_character();
            if ch.value == '{' && !quote {
                dimension += 1;
                if dimension > 1 {
                    let sub = self.parse(depth + 1)?;
                    entries.push(PgValue::Array(sub));
                    // The nested call consumed its closing brace.
                    dimension -= 1;
                }
            } else if ch.value == '}' && !quote {
                if dimension == 0 {
                    return Err(self.unbalanced());
                }
                dimension -= 1;
                if dimension == 0 {
                    self.push_entry(&mut entries, &mut recorded, false)?;
                    if nested {
                        return Ok(entries);
                    }
                }
            } else if ch.value == '"' && !ch.escaped {
                if quote {
                    self.push_entry(&mut entries, &mut recorded, true)?;
                }
                quote = !quote;
            } else if ch.value == self.delimiter && !quote {
                self.push_entry(&mut entries, &mut recorded, false)?;
            } else {
                recorded.push(ch.value);
            }
        }

        if dimension != 0 {
            return Err(self.unbalanced());
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn as_text(element: &str) -> Result<PgValue, DecodeError> {
        Ok(PgValue::Text(element.to_string()))
    }

    fn as_int(element: &str) -> Result<PgValue, DecodeError> {
        element
            .parse()
            .map(PgValue::Int)
            .map_err(|_| DecodeError::InvalidInt(element.to_string()))
    }

    fn text(s: &str) -> PgValue {
        PgValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_simple_elements() {
        assert_eq!(
            parse_array("{1,2,3}", as_int, ',').unwrap(),
            vec![PgValue::Int(1), PgValue::Int(2), PgValue::Int(3)]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_array("{}", as_text, ',').unwrap(), vec![]);
        assert_eq!(parse_array("", as_text, ',').unwrap(), vec![]);
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(
            parse_array("{1,NULL,3}", as_int, ',').unwrap(),
            vec![PgValue::Int(1), PgValue::Null, PgValue::Int(3)]
        );
        // Quoted NULL stays a string.
        assert_eq!(
            parse_array(r#"{NULL,"NULL"}"#, as_text, ',').unwrap(),
            vec![PgValue::Null, text("NULL")]
        );
    }

    #[test]
    fn test_quoted_elements() {
        assert_eq!(
            parse_array(r#"{"a b","c,d",plain}"#, as_text, ',').unwrap(),
            vec![text("a b"), text("c,d"), text("plain")]
        );
        // Backslash escapes inside quotes.
        assert_eq!(
            parse_array(r#"{"quo\"te","back\\slash"}"#, as_text, ',').unwrap(),
            vec![text(r#"quo"te"#), text(r"back\slash")]
        );
        // Quoted empty string is an element; it is not dropped.
        assert_eq!(
            parse_array(r#"{"",x}"#, as_text, ',').unwrap(),
            vec![text(""), text("x")]
        );
    }

    #[test]
    fn test_braces_inside_quotes_are_literal() {
        assert_eq!(
            parse_array(r#"{"{a}","}"}"#, as_text, ',').unwrap(),
            vec![text("{a}"), text("}")]
        );
    }

    #[test]
    fn test_nested_arrays() {
        assert_eq!(
            parse_array("{{1,2},{3,4}}", as_int, ',').unwrap(),
            vec![
                PgValue::Array(vec![PgValue::Int(1), PgValue::Int(2)]),
                PgValue::Array(vec![PgValue::Int(3), PgValue::Int(4)]),
            ]
        );
        assert_eq!(
            parse_array("{{{1}},{{2}}}", as_int, ',').unwrap(),
            vec![
                PgValue::Array(vec![PgValue::Array(vec![PgValue::Int(1)])]),
                PgValue::Array(vec![PgValue::Array(vec![PgValue::Int(2)])]),
            ]
        );
    }

    #[test]
    fn test_dimension_prefix_is_skipped() {
        assert_eq!(
            parse_array("[0:2]={1,2,3}", as_int, ',').unwrap(),
            vec![PgValue::Int(1), PgValue::Int(2), PgValue::Int(3)]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        // box[] separates elements with a semicolon; the commas belong
        // to the element text.
        assert_eq!(
            parse_array("{(2,2),(0,0);(4,4),(3,3)}", as_text, ';').unwrap(),
            vec![text("(2,2),(0,0)"), text("(4,4),(3,3)")]
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(matches!(
            parse_array("{1,2", as_int, ','),
            Err(DecodeError::UnbalancedArray(_))
        ));
        assert!(matches!(
            parse_array("{{1,2}", as_int, ','),
            Err(DecodeError::UnbalancedArray(_))
        ));
        assert!(matches!(
            parse_array("}", as_int, ','),
            Err(DecodeError::UnbalancedArray(_))
        ));
    }

    #[test]
    fn test_transform_errors_propagate() {
        assert_eq!(
            parse_array("{1,x,3}", as_int, ',').unwrap_err(),
            DecodeError::InvalidInt("x".to_string())
        );
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let literal = |dimensions: usize| {
            format!("{}1{}", "{".repeat(dimensions), "}".repeat(dimensions))
        };

        assert!(parse_array(&literal(MAX_DIMENSIONS), as_int, ',').is_ok());
        assert_eq!(
            parse_array(&literal(MAX_DIMENSIONS + 1), as_int, ',').unwrap_err(),
            DecodeError::ArrayTooDeep(MAX_DIMENSIONS)
        );

        // An unterminated run of open braces errs at the bound instead
        // of recursing once per brace.
        let braces = "{".repeat(2_000_000);
        assert_eq!(
            parse_array(&braces, as_int, ',').unwrap_err(),
            DecodeError::ArrayTooDeep(MAX_DIMENSIONS)
        );
    }
}
