//! Configuration options for markup rendering

/// How void elements (such as `img`) are closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
    /// HTML style: `<img src="a.png">`
    #[default]
    Html,
    /// XHTML style: `<img src="a.png" />`
    Xhtml,
}

/// Options for rendering a node tree
///
/// Only void elements are affected; every other node renders the same
/// regardless of options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Closing style for void elements
    pub void_style: VoidStyle,
}

impl RenderOptions {
    /// Create options with the given void element style
    pub fn with_void_style(void_style: VoidStyle) -> Self {
        Self { void_style }
    }
}
