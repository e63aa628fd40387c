use std::io::Write;

use crate::{
    config::{LexerConfig, OutputFormat},
    tokenizer::{source::CharSource, Token, Tokenizer},
    RustlexError, RustlexResult,
};

/// Drives `tokenizer` to the end (or to `max_tokens`) and writes one line per
/// token. Returns the number of tokens written, end of input excluded.
#[tracing::instrument(level = "debug", skip(tokenizer, out))]
pub fn write_tokens<S: CharSource, W: Write>(
    tokenizer: &mut Tokenizer<S>,
    config: &LexerConfig,
    out: &mut W,
) -> RustlexResult<usize> {
    let mut count = 0;
    loop {
        if config.max_tokens.is_some_and(|max| count >= max) {
            tracing::debug!("token limit reached after {} tokens", count);
            return Ok(count);
        }

        let token = tokenizer.next_token();
        if token.is_end_of_input() {
            if config.emit_end_of_input {
                write_token(&token, config.format, out)?;
            }
            tracing::debug!("tokenized {} tokens", count);
            return Ok(count);
        }

        write_token(&token, config.format, out)?;
        count += 1;
    }
}

fn write_token<W: Write>(token: &Token, format: OutputFormat, out: &mut W) -> RustlexResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", token)?,
        OutputFormat::Json => {
            let line = serde_json::to_string(token)
                .map_err(|e| RustlexError::internal(format!("Failed to serialize token: {}", e)))?;
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
