//! Placeholder extraction.
//!
//! [`extract_fields`] scans template content for `{{label}}` markers and
//! returns an [`Extraction`]: the ordered field list, the initial form data
//! and the captured source content that every later render starts from.
//!
//! # Matching rules
//!
//! - A marker is two open braces, the shortest run of characters, two close
//!   braces. The run may be empty and never spans a line terminator
//!   (`\n`, `\r`, U+2028 or U+2029).
//! - Matches do not overlap and are reported left to right.
//! - A lone `{{` without a closing `}}` on the same line is not a marker and
//!   passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{Field, FormData};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([^\n\r\x{2028}\x{2029}]*?)\}\}").expect("placeholder pattern compiles")
});

/// Extracts every placeholder occurrence from `content`.
///
/// Never fails: content without markers yields an empty extraction.
///
/// # Example
///
/// ```rust
/// use cmsnip_template::extract_fields;
///
/// let extraction = extract_fields("Hello {{Name}}, you are {{Age}}.");
/// let labels: Vec<_> = extraction.fields().iter().map(|f| f.label.as_str()).collect();
///
/// assert_eq!(labels, ["Name", "Age"]);
/// assert_eq!(extraction.form_data().len(), 2);
/// ```
pub fn extract_fields(content: &str) -> Extraction {
    let fields: Vec<Field> = PLACEHOLDER
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Field::new(
                inner.as_str().trim(),
                whole.as_str(),
                whole.start(),
            ))
        })
        .collect();

    let form_data: FormData = fields
        .iter()
        .map(|field| (field.label.clone(), String::new()))
        .collect();

    log::debug!(
        "extracted {} placeholder(s), {} distinct label(s)",
        fields.len(),
        form_data.len()
    );

    Extraction {
        content: content.to_string(),
        fields,
        form_data,
    }
}

/// The result of scanning one piece of template content.
///
/// An extraction is immutable. Callers copy [`fields`](Self::fields), fill
/// in values, and hand them back to [`render`](Self::render), which always
/// works from the captured original content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub(crate) content: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) form_data: FormData,
}

impl Extraction {
    /// The source content captured at extraction time.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Extracted fields in document order, all unbound.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Consumes the extraction, returning its fields.
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Initial form data: every distinct label mapped to `""`.
    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for field in &self.fields {
            if !seen.contains(&field.label.as_str()) {
                seen.push(field.label.as_str());
            }
        }
        seen
    }

    /// Number of placeholder occurrences.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the content has no placeholders.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds fields pre-populated from previously saved form data.
    ///
    /// Values are looked up by trimmed label; labels missing from `saved`
    /// stay empty. Used when reopening an existing snippet for editing.
    pub fn prefill(&self, saved: &FormData) -> Vec<Field> {
        self.fields
            .iter()
            .map(|field| match saved.get(&field.label) {
                Some(value) => field.clone().with_value(value.as_str()),
                None => {
                    log::warn!("no saved value for field '{}'", field.label);
                    field.clone()
                }
            })
            .collect()
    }
}
