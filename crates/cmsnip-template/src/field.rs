//! Field and form data types.
//!
//! A [`Field`] is one placeholder occurrence found in template content.
//! [`FormData`] is the flat label-to-value map that gets persisted alongside
//! a snippet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label-keyed field values, one entry per distinct trimmed label.
///
/// Ordered by label so serialized payloads are stable.
pub type FormData = BTreeMap<String, String>;

/// One placeholder occurrence extracted from template content.
///
/// Two occurrences of the same placeholder produce two independent fields.
///
/// # Example
///
/// ```rust
/// use cmsnip_template::extract_fields;
///
/// let extraction = extract_fields("Dear {{ Name }},");
/// let field = &extraction.fields()[0];
///
/// assert_eq!(field.label, "Name");
/// assert_eq!(field.original, "{{ Name }}");
/// assert_eq!(field.offset, 5);
/// assert!(!field.is_bound());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Text between the braces, trimmed.
    pub label: String,
    /// Current value entered for this occurrence.
    #[serde(default)]
    pub value: String,
    /// The exact matched placeholder, braces and inner whitespace included.
    pub original: String,
    /// Byte offset of the occurrence in the source content.
    pub offset: usize,
}

impl Field {
    /// Creates an unbound field for a placeholder occurrence.
    pub fn new(label: impl Into<String>, original: impl Into<String>, offset: usize) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            original: original.into(),
            offset,
        }
    }

    /// Returns a copy of this field carrying `value`.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Returns `true` once a non-empty value has been entered.
    ///
    /// Unbound fields leave their placeholder in rendered output.
    pub fn is_bound(&self) -> bool {
        !self.value.is_empty()
    }

    /// Byte range the occurrence covers in the source content.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.original.len()
    }
}
