//! Conversion from styled text to HTML nodes.

use htmlnode_core::{HtmlNode, LeafNode, Props};

use crate::text::{TextNode, TextType};
use crate::Result;

/// Convert a text node into the leaf node that renders it.
///
/// | type   | element         | value | attributes      |
/// |--------|-----------------|-------|-----------------|
/// | Text   | none            | text  | none            |
/// | Bold   | `b`             | text  | none            |
/// | Italic | `i`             | text  | none            |
/// | Code   | `code`          | text  | none            |
/// | Link   | `a`             | text  | `href`          |
/// | Image  | `img` (void)    | empty | `src`, `alt`    |
///
/// A missing URL on a link or image becomes an empty attribute value.
pub fn text_node_to_leaf(node: &TextNode) -> LeafNode {
    let text = node.text.as_str();
    let url = node.url.as_deref().unwrap_or_default();

    match node.text_type {
        TextType::Text => LeafNode::text(text),
        TextType::Bold => LeafNode::element("b", text),
        TextType::Italic => LeafNode::element("i", text),
        TextType::Code => LeafNode::element("code", text),
        TextType::Link => LeafNode::new(Some("a"), Some(text), Some(attrs(&[("href", url)]))),
        TextType::Image => LeafNode::void_element("img", attrs(&[("src", url), ("alt", text)])),
    }
}

/// Convert text whose type is given as a label such as `"code"`.
///
/// Fails with [`crate::Error::UnknownTextType`] for labels outside the known
/// set.
pub fn label_to_leaf(text: &str, label: &str, url: Option<&str>) -> Result<LeafNode> {
    let node = TextNode::from_label(text, label, url)?;
    Ok(text_node_to_leaf(&node))
}

/// Convert a run of inline text nodes into children for a parent node,
/// keeping their order.
pub fn text_nodes_to_children<'a, I>(nodes: I) -> Vec<HtmlNode>
where
    I: IntoIterator<Item = &'a TextNode>,
{
    nodes
        .into_iter()
        .map(|node| HtmlNode::Leaf(text_node_to_leaf(node)))
        .collect()
}

impl From<&TextNode> for LeafNode {
    fn from(node: &TextNode) -> Self {
        text_node_to_leaf(node)
    }
}

impl From<TextNode> for LeafNode {
    fn from(node: TextNode) -> Self {
        text_node_to_leaf(&node)
    }
}

fn attrs(pairs: &[(&str, &str)]) -> Props {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
