//! Sandboxed preview documents.
//!
//! Rendered content is shown in a document-isolated frame and never
//! evaluated in the host page. [`PreviewDocument`] assembles that frame's
//! document: a minimal style reset followed by the entity-decoded content.
//! The content itself is treated as opaque HTML; nothing here sanitises or
//! validates it.

use crate::decode::decode_html;

/// Style reset prepended to every preview unless overridden.
pub const DEFAULT_STYLE_RESET: &str = "body { color: white; }";

/// Role attribute identifying the preview surface.
pub const PREVIEW_ROLE: &str = "preview";

/// A preview of rendered content for a sandboxed frame.
///
/// # Example
///
/// ```rust
/// use cmsnip_template::PreviewDocument;
///
/// let preview = PreviewDocument::new("<b>Hi</b>").with_style_reset("body { margin: 0; }");
/// assert_eq!(preview.srcdoc(), "<style>body { margin: 0; }</style><b>Hi</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    content: String,
    style_reset: String,
}

impl PreviewDocument {
    /// Creates a preview of `rendered` with the default style reset.
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            content: rendered.into(),
            style_reset: DEFAULT_STYLE_RESET.to_string(),
        }
    }

    /// Replaces the style reset.
    pub fn with_style_reset(mut self, css: impl Into<String>) -> Self {
        self.style_reset = css.into();
        self
    }

    /// The rendered content this preview was built from.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The style reset in use.
    pub fn style_reset(&self) -> &str {
        &self.style_reset
    }

    /// The full document written into the frame.
    pub fn srcdoc(&self) -> String {
        format!(
            "<style>{}</style>{}",
            self.style_reset,
            decode_html(&self.content)
        )
    }

    /// Frame markup carrying the document in an escaped `srcdoc` attribute.
    ///
    /// The empty `sandbox` attribute applies every restriction, so scripts in
    /// the preview cannot reach the host page.
    pub fn to_iframe(&self) -> String {
        let srcdoc = self.srcdoc();
        format!(
            "<iframe role=\"{}\" sandbox=\"\" srcdoc=\"{}\"></iframe>",
            PREVIEW_ROLE,
            html_escape::encode_double_quoted_attribute(&srcdoc)
        )
    }
}
