//! Token stream dumps
//!
//! Debug views of a rendered token stream, selectable by name:
//!
//! - `simple`: one token per line in its display form (`<text "a">`)
//! - `json`: pretty-printed JSON array
//! - `yaml`: YAML sequence
//!
//! These show what a render pass produced; they are not markup output. Turning
//! tokens into HTML is left to a sink.

use super::token::Token;
use std::fmt;
use std::str::FromStr;

/// Error that can occur while dumping tokens
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format name not recognized
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Simple,
    Json,
    Yaml,
}

impl TokenFormat {
    pub fn name(&self) -> &'static str {
        match self {
            TokenFormat::Simple => "simple",
            TokenFormat::Json => "json",
            TokenFormat::Yaml => "yaml",
        }
    }

    pub fn all() -> [TokenFormat; 3] {
        [TokenFormat::Simple, TokenFormat::Json, TokenFormat::Yaml]
    }
}

impl FromStr for TokenFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TokenFormat::all()
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get all available format names
pub fn available_formats() -> Vec<String> {
    TokenFormat::all()
        .iter()
        .map(|format| format.name().to_string())
        .collect()
}

/// Dump tokens in the requested format
pub fn format_tokens(tokens: &[Token], format: TokenFormat) -> Result<String, FormatError> {
    match format {
        TokenFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        TokenFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string())),
        TokenFormat::Yaml => serde_yaml::to_string(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string())),
    }
}

/// Dump tokens, looking the format up by name
pub fn format_tokens_as(tokens: &[Token], format: &str) -> Result<String, FormatError> {
    format_tokens(tokens, format.parse()?)
}
