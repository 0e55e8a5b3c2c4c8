//! htmlnode-core - HTML node tree and markup serialization
//!
//! This crate provides the node tree that page builders hand their content to,
//! and the rules that turn that tree into markup text. It has no knowledge of
//! markdown; the `htmlnode` crate builds on it to convert styled text.
//!
//! # Architecture
//!
//! ```text
//!                ┌───────────────────────┐
//! LeafNode ─────▶│                       │
//!                │ HtmlNode::Leaf/Parent │ ──render──▶ Markup String
//! ParentNode ───▶│                       │
//!                └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmlnode_core::{HtmlNode, LeafNode, ParentNode, Props};
//!
//! let link = LeafNode::new(
//!     Some("a"),
//!     Some("docs"),
//!     Some(Props::from([("href".to_string(), "/docs".to_string())])),
//! );
//!
//! let paragraph = ParentNode::element(
//!     "p",
//!     vec![
//!         HtmlNode::from(LeafNode::text("Read the ")),
//!         HtmlNode::from(link),
//!         HtmlNode::from(LeafNode::text(".")),
//!     ],
//! );
//!
//! assert_eq!(
//!     paragraph.render().unwrap(),
//!     "<p>Read the <a href=\"/docs\">docs</a>.</p>"
//! );
//! ```

mod node;
mod options;
mod props;

pub use node::{HtmlNode, LeafNode, ParentNode};
pub use options::{RenderOptions, VoidStyle};
pub use props::{props_to_html, Props};

/// Error type for rendering a node tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value")]
    EmptyValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node has no children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RenderError::EmptyValue.to_string(), "leaf node has no value");
        assert_eq!(RenderError::MissingTag.to_string(), "parent node has no tag");
        assert_eq!(
            RenderError::MissingChildren.to_string(),
            "parent node has no children"
        );
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderError>();
        assert_send_sync::<HtmlNode>();
        assert_send_sync::<LeafNode>();
        assert_send_sync::<ParentNode>();
        assert_send_sync::<RenderOptions>();
    }
}
