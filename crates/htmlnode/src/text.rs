//! Inline styled text
//!
//! A [`TextNode`] is the value a markdown parser emits for a run of inline
//! text: the text itself, how it is styled, and the target URL for links and
//! images.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Styling intent of a text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Plain text
    Text,
    /// Strong emphasis (bold)
    Bold,
    /// Emphasis (italic)
    Italic,
    /// Inline code
    Code,
    /// Link to `url`
    Link,
    /// Image at `url`, text used as alt text
    Image,
}

impl TextType {
    /// Every text type, in declaration order
    pub const ALL: [TextType; 6] = [
        TextType::Text,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
    ];

    /// Stable label used in diagnostics and when parsing
    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        TextType::ALL
            .into_iter()
            .find(|t| t.as_str() == label)
            .ok_or_else(|| Error::UnknownTextType(label.to_string()))
    }
}

/// A run of inline text with its styling intent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    /// Target for links and images
    pub url: Option<String>,
}

impl TextNode {
    /// Create a text node without a URL
    pub fn new(text: &str, text_type: TextType) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: None,
        }
    }

    /// Create a text node with a URL
    pub fn with_url(text: &str, text_type: TextType, url: &str) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: Some(url.to_string()),
        }
    }

    /// Create a text node from a text type label such as `"bold"`
    pub fn from_label(text: &str, label: &str, url: Option<&str>) -> Result<Self> {
        Ok(Self {
            text: text.to_string(),
            text_type: label.parse()?,
            url: url.map(str::to_string),
        })
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.text_type,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
