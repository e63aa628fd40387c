use nom::{error::Error, number::complete::double};

/// Returns true for characters that start or continue a number literal.
pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parses accumulated number text (`[0-9.]+`) as a float.
///
/// The parse is best-effort: the longest valid decimal prefix wins, so
/// `1.2.3` is `1.2`, and text with no valid prefix, such as a lone `.`,
/// is `0.0`.
#[tracing::instrument(level = "trace")]
pub fn parse_number(text: &str) -> f64 {
    match double::<&str, Error<&str>>(text) {
        Ok((rest, value)) => {
            if !rest.is_empty() {
                tracing::trace!(rest, "ignoring trailing number text");
            }
            value
        }
        Err(_) => {
            tracing::trace!("no valid number prefix, using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_decimal() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("123.45"), 123.45);
        assert_eq!(parse_number("0"), 0.0);
    }

    #[test]
    fn test_leading_and_trailing_dot() {
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
    }

    #[test]
    fn test_malformed_uses_longest_prefix() {
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("7..8"), 7.0);
    }

    #[test]
    fn test_no_prefix_is_zero() {
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("..5"), 0.0);
    }

    #[test]
    fn test_number_chars() {
        assert!(is_number_char('0'));
        assert!(is_number_char('9'));
        assert!(is_number_char('.'));
        assert!(!is_number_char('e'));
        assert!(!is_number_char('-'));
        assert!(!is_number_char('٣'));
    }
}
