//! Placeholder extraction and substitution for cmSnip templates.
//!
//! Templates are HTML fragments with `{{label}}` markers. Editing a snippet
//! means extracting those markers into form fields, letting the user fill
//! them in, and re-rendering the content for a sandboxed preview and for
//! the persisted payload.
//!
//! # Quick Start
//!
//! ```rust
//! use cmsnip_template::{extract_fields, PreviewDocument};
//!
//! let extraction = extract_fields("<p>Hello {{ Name }}, you are {{Age}}.</p>");
//!
//! // Fill in the form, one occurrence at a time
//! let mut fields = extraction.fields().to_vec();
//! fields[0].value = "Ada".to_string();
//!
//! // Partial renders keep unbound placeholders
//! let rendered = extraction.render(&fields);
//! assert_eq!(rendered.content, "<p>Hello Ada, you are {{Age}}.</p>");
//! assert_eq!(rendered.form_data["Name"], "Ada");
//! assert_eq!(rendered.form_data["Age"], "");
//!
//! let preview = PreviewDocument::new(rendered.content);
//! assert!(preview.srcdoc().starts_with("<style>"));
//! ```
//!
//! # Guarantees
//!
//! - Extraction and rendering never fail.
//! - Fields come back in document order, one per occurrence.
//! - Rendering is pure: it starts from the extraction-time content every
//!   time and returns the content together with the updated form data.
//! - Placeholder text is matched literally, never as a pattern.

mod decode;
mod extract;
mod field;
mod preview;
mod render;

pub use decode::{decode_html, extract_decoded};
pub use extract::{extract_fields, Extraction};
pub use field::{Field, FormData};
pub use preview::{PreviewDocument, DEFAULT_STYLE_RESET, PREVIEW_ROLE};
pub use render::{ParseModeError, Rendered, SubstitutionMode};
