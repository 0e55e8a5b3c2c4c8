//! # htmlnode
//!
//! Styled text nodes and their conversion to renderable HTML nodes.
//!
//! A markdown parser produces [`TextNode`] values describing inline text and
//! its styling intent. [`text_node_to_leaf`] maps each one onto a concrete
//! element, and the resulting nodes are grouped and rendered with the node
//! tree from `htmlnode-core`, which this crate re-exports.
//!
//! ## Example
//!
//! ```rust
//! use htmlnode::{text_nodes_to_children, ParentNode, TextNode, TextType};
//!
//! let inline = vec![
//!     TextNode::new("This is ", TextType::Text),
//!     TextNode::new("bold", TextType::Bold),
//!     TextNode::new(" and a ", TextType::Text),
//!     TextNode::with_url("link", TextType::Link, "https://x.test"),
//! ];
//!
//! let paragraph = ParentNode::element("p", text_nodes_to_children(&inline));
//! assert_eq!(
//!     paragraph.render().unwrap(),
//!     "<p>This is <b>bold</b> and a <a href=\"https://x.test\">link</a></p>"
//! );
//! ```

mod convert;
mod text;

pub use convert::{label_to_leaf, text_node_to_leaf, text_nodes_to_children};
pub use htmlnode_core::{
    props_to_html, HtmlNode, LeafNode, ParentNode, Props, RenderError, RenderOptions, VoidStyle,
};
pub use text::{TextNode, TextType};

/// Error type for text conversion and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown text type: {0}")]
    UnknownTextType(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownTextType("underline".to_string());
        assert_eq!(err.to_string(), "unknown text type: underline");

        let err = Error::from(RenderError::MissingTag);
        assert_eq!(err.to_string(), "parent node has no tag");
    }

    #[test]
    fn test_render_error_converts_with_question_mark() {
        fn render(node: &LeafNode) -> Result<String> {
            Ok(node.render()?)
        }

        let node = LeafNode::new(Some("p"), None, None);
        assert_eq!(render(&node), Err(Error::Render(RenderError::EmptyValue)));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<TextNode>();
        assert_send_sync::<TextType>();
    }
}
