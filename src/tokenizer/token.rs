use std::fmt;

use serde::{Serialize, Serializer};

use super::{keyword::Keyword, types::PrimitiveType};

/// A classified unit of source text.
///
/// Serializes adjacently tagged, e.g. `{"kind":"keyword","value":"let"}` and
/// `{"kind":"end_of_input"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// The source is exhausted. Once returned, it is returned forever.
    EndOfInput,
    Keyword(Keyword),
    PrimitiveType(PrimitiveType),
    Identifier(String),
    /// Digit runs too long for `f64` are infinite; JSON writes them as `"inf"`.
    Number(#[serde(serialize_with = "serialize_number")] f64),
    /// Any single character that starts no other token.
    Symbol(char),
}

/// JSON has no non-finite numbers, so those are written as strings.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

impl Token {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfInput => write!(f, "end of input"),
            Token::Keyword(keyword) => write!(f, "keyword `{}`", keyword),
            Token::PrimitiveType(ty) => write!(f, "primitive type `{}`", ty),
            Token::Identifier(name) => write!(f, "identifier `{}`", name),
            Token::Number(value) => write!(f, "number {}", value),
            Token::Symbol(c) => write!(f, "symbol `{}`", c.escape_debug()),
        }
    }
}
