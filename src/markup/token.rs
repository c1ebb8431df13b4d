//! Token definitions for rendered markup
//!
//! A render pass linearizes a content tree into a flat sequence of [`Token`]s.
//! The core itself only ever produces [`Token::Text`]. The remaining variants
//! belong to element vocabularies layered on top, which emit tag boundaries,
//! raw markup and comments into the same stream.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute attached to an element start tag.
///
/// Attributes are carried around unmerged; combining duplicates is the job of
/// whatever vocabulary constructs them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Attribute {
    /// Create an attribute with a value, e.g. `class="card"`
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a value-less attribute, e.g. `hidden`
    pub fn flag(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={:?}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// All tokens that can appear in a rendered stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    // Element boundaries (emitted by element vocabularies)
    StartTag {
        name: String,
        attributes: Vec<Attribute>,
    },
    EndTag(String),

    // Resolved text, passed to the sink verbatim
    Text(String),

    // Pre-rendered markup and comments (emitted by element vocabularies)
    Raw(String),
    Comment(String),
}

impl Token {
    /// Shorthand for a text token
    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    /// Check if this token is plain text
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// Check if this token opens or closes an element
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::StartTag { .. } | Token::EndTag(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::StartTag { name, attributes } => {
                write!(f, "<start-tag {name}")?;
                for attribute in attributes {
                    write!(f, " {attribute}")?;
                }
                write!(f, ">")
            }
            Token::EndTag(name) => write!(f, "<end-tag {name}>"),
            Token::Text(text) => write!(f, "<text {text:?}>"),
            Token::Raw(raw) => write!(f, "<raw {raw:?}>"),
            Token::Comment(comment) => write!(f, "<comment {comment:?}>"),
        }
    }
}
