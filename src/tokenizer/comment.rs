//! Comment skipping.
//!
//! Both functions are called after the tokenizer has consumed the two-character
//! opening marker. They return the first character after the comment, which
//! becomes the tokenizer's new lookahead, or `None` if the source ran out.

use super::source::CharSource;

/// Skips the rest of a `//` comment, including the `\n` or `\r` ending it.
#[tracing::instrument(level = "trace", skip(source))]
pub fn skip_line_comment(source: &mut impl CharSource) -> Option<char> {
    loop {
        match source.next_char() {
            Some('\n' | '\r') => return source.next_char(),
            Some(_) => {}
            None => {
                tracing::trace!("line comment ran to end of input");
                return None;
            }
        }
    }
}

/// Skips the rest of a `/* ... */` comment. Block comments do not nest.
#[tracing::instrument(level = "trace", skip(source))]
pub fn skip_block_comment(source: &mut impl CharSource) -> Option<char> {
    let mut after_star = false;
    while let Some(c) = source.next_char() {
        if after_star && c == '/' {
            return source.next_char();
        }
        after_star = c == '*';
    }
    tracing::trace!("unterminated block comment");
    None
}
