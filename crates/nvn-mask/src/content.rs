//! # Content — What a Surface Wants to Show
//!
//! A tagged union replacing the anything-goes input the masking layer
//! would otherwise have to duck-type. Scrambling is defined only for the
//! `Text` variant; a `Node` (chart, sparkline, any non-textual renderable)
//! degrades to a blank stand-in when masked. The compiler, not a runtime
//! type check, guarantees nodes never reach the codec.

use serde::{Deserialize, Serialize};

/// A piece of renderable content handed to the masking layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    /// Display text: a formatted number, a percentage, a ticker symbol.
    Text(String),
    /// An opaque non-textual renderable, identified for diagnostics only.
    Node(String),
}

impl Content {
    /// Text content from anything displayable.
    pub fn text(value: impl std::fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// The text, when this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Node(_) => None,
        }
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
