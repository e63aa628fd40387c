pub mod config;
pub mod error;
pub mod output;
pub mod tokenizer;

// Re-exports
pub use config::{LexerConfig, OutputFormat};
pub use error::*;
pub use tokenizer::{
    keyword::Keyword,
    source::{CharSource, ReaderSource, StrSource},
    tokenize,
    types::PrimitiveType,
    Token, Tokenizer,
};
