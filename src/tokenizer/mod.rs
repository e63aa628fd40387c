//! # Tokenizer Component
//!
//! The tokenizer turns a stream of characters into a stream of classified
//! tokens: keywords, primitive-type names, identifiers, numbers, and single
//! character symbols.
//!
//! ## Design Principles
//!
//! * **Pull-based**: [`Tokenizer::next_token`] returns exactly one token per
//!   call. Between calls only a single lookahead character is kept.
//! * **Never rejects input**: every character sequence produces some token.
//!   Unknown characters become [`Token::Symbol`] and malformed numbers are
//!   parsed best-effort.
//! * **Terminal end of input**: once [`Token::EndOfInput`] is returned it is
//!   returned on every later call.
//!
//! ## Dispatch Order
//!
//! Whitespace and comments are skipped in a loop, then the lookahead decides
//! the token class: end of input, ASCII letter (word), digit or `.` (number),
//! `/` followed by `/` or `*` (comment), anything else (symbol).
//!
//! ## Known Limitations
//!
//! * Identifiers are `[A-Za-z][A-Za-z0-9]*`. `_` is a symbol.
//! * Operators are single characters; `::` is two `:` symbols.
//! * Block comments do not nest.
//! * Tokens carry no position information.
//!
//! ## Component Structure
//!
//! * [`tokenizer`]: the [`Tokenizer`] state machine
//! * [`token`]: the [`Token`] type
//! * [`keyword`]: the keyword table
//! * [`types`]: the primitive-type table
//! * [`literal`]: number recognition and parsing
//! * [`whitespace`]: whitespace classification
//! * [`comment`]: comment skipping
//! * [`source`]: character sources
//!
//! ## Usage Example
//!
//! ```rust
//! use rustlex::tokenizer::{keyword::Keyword, token::Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::from_str("let x = 5;\n");
//! assert_eq!(tokenizer.next_token(), Token::Keyword(Keyword::Let));
//! assert_eq!(tokenizer.next_token(), Token::Identifier("x".to_string()));
//! assert_eq!(tokenizer.next_token(), Token::Symbol('='));
//! assert_eq!(tokenizer.next_token(), Token::Number(5.0));
//! assert_eq!(tokenizer.next_token(), Token::Symbol(';'));
//! assert_eq!(tokenizer.next_token(), Token::EndOfInput);
//! ```

pub mod comment;
pub mod keyword;
pub mod literal;
pub mod source;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
pub mod types;
pub mod whitespace;

pub use token::Token;
pub use tokenizer::{tokenize, Tokenizer};
