//! HTML node tree
//!
//! A node is either a [`LeafNode`], which holds literal text, or a
//! [`ParentNode`], which holds other nodes. [`HtmlNode`] is the sum of the
//! two and is what a parent stores as its children.
//!
//! Nodes are built once and then rendered any number of times. Rendering
//! never mutates a node and either returns the complete markup for the subtree
//! or an error, never a partial string.

use std::fmt;

use crate::options::{RenderOptions, VoidStyle};
use crate::props::{write_props, Props};
use crate::{RenderError, Result};

/// A renderable node: a leaf with a literal value or a parent with children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Node holding literal text
    Leaf(LeafNode),
    /// Node holding child nodes
    Parent(ParentNode),
}

impl HtmlNode {
    /// Element name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => parent.tag(),
        }
    }

    /// Element attributes, if any
    pub fn props(&self) -> Option<&Props> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.props(),
            HtmlNode::Parent(parent) => parent.props(),
        }
    }

    /// Attribute fragment for the opening tag
    pub fn props_to_html(&self) -> String {
        crate::props::props_to_html(self.props())
    }

    /// Render this node to markup with default options
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    /// Render this node to markup
    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        self.write_html(options, &mut out)?;
        Ok(out)
    }

    /// Debug string naming the variant and its fields
    pub fn describe(&self) -> String {
        match self {
            HtmlNode::Leaf(leaf) => leaf.describe(),
            HtmlNode::Parent(parent) => parent.describe(),
        }
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(options, out),
            HtmlNode::Parent(parent) => parent.write_html(options, out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A node holding literal text, optionally wrapped in an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    props: Option<Props>,
    /// Rendered as an opening tag only, with no value
    void: bool,
}

impl LeafNode {
    /// Create a leaf node.
    ///
    /// Nothing is validated here; an absent or empty value is reported by
    /// [`LeafNode::render`].
    pub fn new(tag: Option<&str>, value: Option<&str>, props: Option<Props>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            props,
            void: false,
        }
    }

    /// Create a leaf that renders its value without a wrapping element
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value), None)
    }

    /// Create a leaf wrapped in `tag`, without attributes
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), Some(value), None)
    }

    /// Create a void element leaf such as `img`.
    ///
    /// Its value is the empty string and it renders as a lone opening tag,
    /// so the empty value check does not apply.
    pub fn void_element(tag: &str, props: Props) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(String::new()),
            props: Some(props),
            void: true,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    /// Whether this leaf was built with [`LeafNode::void_element`]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Attribute fragment for the opening tag
    pub fn props_to_html(&self) -> String {
        crate::props::props_to_html(self.props())
    }

    /// Render this leaf to markup with default options.
    ///
    /// Without a tag the value is returned as is; otherwise it is wrapped as
    /// `<tag attrs>value</tag>`. Fails with [`RenderError::EmptyValue`] when
    /// the value is absent or empty.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    /// Render this leaf to markup
    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        self.write_html(options, &mut out)?;
        Ok(out)
    }

    /// Debug string: `LeafNode(tag, value, props)`
    pub fn describe(&self) -> String {
        format!(
            "LeafNode({}, {}, {})",
            describe_opt(self.tag.as_deref()),
            describe_opt(self.value.as_deref()),
            describe_props(self.props.as_ref()),
        )
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().unwrap_or_default();

        match self.tag.as_deref() {
            Some(tag) if self.void => {
                out.push('<');
                out.push_str(tag);
                write_props(self.props.as_ref(), out);
                match options.void_style {
                    VoidStyle::Html => out.push('>'),
                    VoidStyle::Xhtml => out.push_str(" />"),
                }
            }
            _ if value.is_empty() => return Err(RenderError::EmptyValue),
            None => out.push_str(value),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                write_props(self.props.as_ref(), out);
                out.push('>');
                out.push_str(value);
                push_close(tag, out);
            }
        }

        Ok(())
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A node wrapping child nodes in an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: Option<String>,
    children: Option<Vec<HtmlNode>>,
    props: Option<Props>,
}

impl ParentNode {
    /// Create a parent node.
    ///
    /// Nothing is validated here; a missing tag or missing children is
    /// reported by [`ParentNode::render`].
    pub fn new(tag: Option<&str>, children: Option<Vec<HtmlNode>>, props: Option<Props>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            children,
            props,
        }
    }

    /// Create a parent wrapping `children` in `tag`, without attributes
    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::new(Some(tag), Some(children), None)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn children(&self) -> Option<&[HtmlNode]> {
        self.children.as_deref()
    }

    pub fn props(&self) -> Option<&Props> {
        self.props.as_ref()
    }

    /// Attribute fragment for the opening tag
    pub fn props_to_html(&self) -> String {
        crate::props::props_to_html(self.props())
    }

    /// Render this node and all of its descendants with default options.
    ///
    /// Fails with [`RenderError::MissingTag`] or
    /// [`RenderError::MissingChildren`], or with the first error raised by a
    /// child.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    /// Render this node and all of its descendants
    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        self.write_html(options, &mut out)?;
        Ok(out)
    }

    /// Debug string: `ParentNode(tag, children: [...], props)`
    pub fn describe(&self) -> String {
        let children = match &self.children {
            Some(children) => {
                let inner: Vec<String> = children.iter().map(HtmlNode::describe).collect();
                format!("[{}]", inner.join(", "))
            }
            None => "None".to_string(),
        };

        format!(
            "ParentNode({}, children: {}, {})",
            describe_opt(self.tag.as_deref()),
            children,
            describe_props(self.props.as_ref()),
        )
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = match self.children.as_deref() {
            Some(children) if !children.is_empty() => children,
            _ => return Err(RenderError::MissingChildren),
        };

        out.push('<');
        out.push_str(tag);
        write_props(self.props.as_ref(), out);
        out.push('>');
        for child in children {
            child.write_html(options, out)?;
        }
        push_close(tag, out);

        Ok(())
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn push_close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn describe_opt(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

fn describe_props(props: Option<&Props>) -> String {
    match props {
        Some(props) => format!("{:?}", props),
        None => "None".to_string(),
    }
}
