/// Returns true for the characters skipped between tokens: space, tab,
/// newline, carriage return, form feed and vertical tab.
///
/// # Examples
///
/// ```
/// # use rustlex::tokenizer::whitespace::is_whitespace;
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\x0C', '\x0B'] {
            assert!(is_whitespace(c), "{:?}", c);
        }
    }

    #[test]
    fn test_not_whitespace() {
        // unicode spaces are symbols, not separators
        for c in ['a', '0', '_', '\0', '\u{A0}', '\u{2003}'] {
            assert!(!is_whitespace(c), "{:?}", c);
        }
    }
}
