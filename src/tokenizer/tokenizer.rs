use std::{io::Read, iter::FusedIterator};

use super::{
    comment::{skip_block_comment, skip_line_comment},
    keyword::Keyword,
    literal::{is_number_char, parse_number},
    source::{CharSource, ReaderSource, StrSource},
    token::Token,
    types::PrimitiveType,
    whitespace::is_whitespace,
};

/// The character read ahead of the current classification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Char(char),
    End,
}

/// Pull-based tokenizer over a [`CharSource`].
///
/// The only state kept between calls is one lookahead character. After a call
/// returns anything other than [`Token::EndOfInput`], the lookahead holds the
/// first character that was not part of that token.
#[derive(Debug)]
pub struct Tokenizer<S> {
    source: S,
    lookahead: Lookahead,
}

impl<S: CharSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            // a blank so the first call skips straight into the input
            lookahead: Lookahead::Char(' '),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Scans and returns the next token.
    ///
    /// Returns [`Token::EndOfInput`] once the source is exhausted, and keeps
    /// returning it on every later call without touching the source again.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let c = match self.lookahead {
                Lookahead::End => return Token::EndOfInput,
                Lookahead::Char(c) => c,
            };

            if c.is_ascii_alphabetic() {
                return self.scan_word(c);
            }

            if is_number_char(c) {
                return self.scan_number(c);
            }

            if c == '/' {
                self.advance();
                match self.lookahead {
                    Lookahead::Char('/') => {
                        tracing::trace!("skipping line comment");
                        self.lookahead = Self::settle(skip_line_comment(&mut self.source));
                        continue;
                    }
                    Lookahead::Char('*') => {
                        tracing::trace!("skipping block comment");
                        self.lookahead = Self::settle(skip_block_comment(&mut self.source));
                        continue;
                    }
                    // the character after `/` is now the lookahead
                    _ => return Token::Symbol('/'),
                }
            }

            self.advance();
            return Token::Symbol(c);
        }
    }

    fn settle(next: Option<char>) -> Lookahead {
        next.map_or(Lookahead::End, Lookahead::Char)
    }

    fn advance(&mut self) {
        if let Lookahead::Char(_) = self.lookahead {
            self.lookahead = Self::settle(self.source.next_char());
        }
    }

    fn skip_whitespace(&mut self) {
        while let Lookahead::Char(c) = self.lookahead {
            if !is_whitespace(c) {
                break;
            }
            self.advance();
        }
    }

    /// Accumulates `[A-Za-z][A-Za-z0-9]*` and classifies it.
    fn scan_word(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        self.advance();
        while let Lookahead::Char(c) = self.lookahead {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            word.push(c);
            self.advance();
        }

        if let Some(keyword) = Keyword::lookup(&word) {
            return Token::Keyword(keyword);
        }
        if let Some(ty) = PrimitiveType::lookup(&word) {
            return Token::PrimitiveType(ty);
        }
        Token::Identifier(word)
    }

    /// Accumulates `[0-9.]+` and parses it best-effort.
    fn scan_number(&mut self, first: char) -> Token {
        let mut text = String::from(first);
        self.advance();
        while let Lookahead::Char(c) = self.lookahead {
            if !is_number_char(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        Token::Number(parse_number(&text))
    }
}

impl<'a> Tokenizer<StrSource<'a>> {
    /// Tokenizer over an in-memory string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::new(StrSource::new(input))
    }
}

impl<R: Read> Tokenizer<ReaderSource<R>> {
    /// Tokenizer over a reader such as stdin or a file.
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderSource::new(reader))
    }
}

/// Yields every token before [`Token::EndOfInput`], then `None`.
impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

impl<S: CharSource> FusedIterator for Tokenizer<S> {}

/// Tokenizes a whole string. The terminal [`Token::EndOfInput`] is not
/// included.
///
/// ```
/// # use rustlex::tokenizer::{tokenize, keyword::Keyword, token::Token};
/// let tokens = tokenize("let x");
/// assert_eq!(
///     tokens,
///     vec![Token::Keyword(Keyword::Let), Token::Identifier("x".to_string())]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::from_str(input).collect()
}
