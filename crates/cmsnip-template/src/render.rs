//! Re-rendering template content from field values.
//!
//! Rendering always starts from the content captured by
//! [`extract_fields`](crate::extract_fields), never from a previous render.
//!
//! - placeholder text is compared literally, so a label like `a.b` only ever
//!   matches `{{a.b}}`, and values are inserted literally
//! - a field with an empty value is unbound and leaves its placeholder in
//!   place, as does any occurrence with no field passed in
//!
//! # Duplicate placeholders
//!
//! When the same placeholder appears more than once, [`SubstitutionMode`]
//! decides how the occurrences relate. See its variants.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::extract::Extraction;
use crate::field::{Field, FormData};

/// How field values map onto placeholder occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstitutionMode {
    /// Occurrences with identical placeholder text are one target.
    ///
    /// Bound fields are applied in list order to a working copy of the
    /// content, each replacing every remaining copy of its placeholder text.
    /// The first bound field carrying a given text therefore fills all of its
    /// occurrences, and text inserted by one field is visible to the fields
    /// after it.
    #[default]
    SharedText,
    /// Each field binds only the occurrence at its own offset.
    ///
    /// Duplicate placeholders keep independent values. All occurrences are
    /// spliced in one left-to-right pass, so inserted values are never
    /// scanned again.
    PerOccurrence,
}

impl SubstitutionMode {
    /// Returns the configuration name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SubstitutionMode::SharedText => "shared-text",
            SubstitutionMode::PerOccurrence => "per-occurrence",
        }
    }
}

impl fmt::Display for SubstitutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown substitution mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown substitution mode '{0}' (expected 'shared-text' or 'per-occurrence')")]
pub struct ParseModeError(pub String);

impl FromStr for SubstitutionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "shared-text" => Ok(SubstitutionMode::SharedText),
            "per-occurrence" => Ok(SubstitutionMode::PerOccurrence),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Output of a render: the substituted content and the synced form data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Content with bound placeholders replaced.
    pub content: String,
    /// Extraction-time form data overlaid with the values passed in.
    pub form_data: FormData,
}

impl Extraction {
    /// Renders with [`SubstitutionMode::SharedText`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use cmsnip_template::extract_fields;
    ///
    /// let extraction = extract_fields("<b>{{X}}</b>");
    /// let fields: Vec<_> = extraction
    ///     .fields()
    ///     .iter()
    ///     .cloned()
    ///     .map(|f| f.with_value("World"))
    ///     .collect();
    ///
    /// let rendered = extraction.render(&fields);
    /// assert_eq!(rendered.content, "<b>World</b>");
    /// assert_eq!(rendered.form_data["X"], "World");
    /// ```
    pub fn render(&self, fields: &[Field]) -> Rendered {
        self.render_with(SubstitutionMode::SharedText, fields)
    }

    /// Renders `fields` into the captured content using `mode`.
    ///
    /// Every field passed updates the returned form data under its label,
    /// in list order, whether or not it is bound.
    pub fn render_with(&self, mode: SubstitutionMode, fields: &[Field]) -> Rendered {
        let mut form_data = self.form_data.clone();
        for field in fields {
            form_data.insert(field.label.clone(), field.value.clone());
        }

        let content = match mode {
            SubstitutionMode::SharedText => fields
                .iter()
                .filter(|f| f.is_bound())
                .fold(self.content.clone(), |working, field| {
                    working.replace(&field.original, &field.value)
                }),
            SubstitutionMode::PerOccurrence => {
                let mut bindings: HashMap<usize, &str> = HashMap::new();
                for field in fields.iter().filter(|f| f.is_bound()) {
                    if self.has_occurrence(field) {
                        bindings.insert(field.offset, field.value.as_str());
                    } else {
                        log::warn!(
                            "ignoring field '{}': no occurrence of {} at offset {}",
                            field.label,
                            field.original,
                            field.offset
                        );
                    }
                }
                self.substitute(|occurrence| bindings.get(&occurrence.offset).copied())
            }
        };

        log::debug!(
            "rendered {} field(s) in {} mode into {} byte(s)",
            fields.len(),
            mode,
            content.len()
        );

        Rendered { content, form_data }
    }

    fn has_occurrence(&self, field: &Field) -> bool {
        self.fields
            .iter()
            .any(|occurrence| occurrence.offset == field.offset && occurrence.original == field.original)
    }

    fn substitute<'v>(&self, lookup: impl Fn(&Field) -> Option<&'v str>) -> String {
        let mut output = String::with_capacity(self.content.len());
        let mut cursor = 0;

        for occurrence in &self.fields {
            if let Some(value) = lookup(occurrence) {
                output.push_str(&self.content[cursor..occurrence.offset]);
                output.push_str(value);
                cursor = occurrence.span().end;
            }
        }

        output.push_str(&self.content[cursor..]);
        output
    }
}
