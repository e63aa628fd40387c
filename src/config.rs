use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::RustlexResult;

/// How the CLI renders tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable token per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexerConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the final end-of-input token.
    #[serde(default = "default_true")]
    pub emit_end_of_input: bool,

    /// Stop after this many tokens (end of input not counted).
    #[serde(default)]
    pub max_tokens: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            emit_end_of_input: default_true(),
            max_tokens: None,
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> RustlexResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> RustlexResult<T> {
    let config = serde_json::from_str(s)?;
    Ok(config)
}

fn default_true() -> bool {
    true
}
