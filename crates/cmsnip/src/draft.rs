//! Editing sessions for templates and snippets.
//!
//! A draft holds the working state of one open form: the name, the active
//! flag and, for snippets built from a template, the extracted fields and
//! their current values. Every field edit re-renders the content from the
//! template so the preview and the payload never drift apart. A draft is
//! dropped after a successful submit or when the user navigates away.

use serde::Serialize;

use cmsnip_template::{
    decode_html, extract_fields, Extraction, Field, FormData, PreviewDocument, Rendered,
    SubstitutionMode,
};

use crate::error::DraftError;
use crate::record::{Snippet, Template};

/// Payload handed to the snippet create/update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetPayload {
    pub name: String,
    pub content: String,
    pub fields: FormData,
    #[serde(rename = "templateID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub active: bool,
}

/// Payload handed to the template create/update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePayload {
    pub name: String,
    pub content: String,
    pub active: bool,
}

fn require(value: &str, what: &'static str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::Missing(what))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Bound {
    template_id: Option<String>,
    template_name: String,
    extraction: Extraction,
    fields: Vec<Field>,
    rendered: Rendered,
}

impl Bound {
    fn new(template: &Template, mode: SubstitutionMode, saved: Option<&FormData>) -> Self {
        let extraction = extract_fields(&decode_html(&template.content));
        let fields = match saved {
            Some(saved) => extraction.prefill(saved),
            None => extraction.fields().to_vec(),
        };
        let rendered = extraction.render_with(mode, &fields);
        Bound {
            template_id: template.id.clone(),
            template_name: template.name.clone(),
            extraction,
            fields,
            rendered,
        }
    }

    fn rerender(&mut self, mode: SubstitutionMode) {
        self.rendered = self.extraction.render_with(mode, &self.fields);
    }
}

#[derive(Debug, Clone)]
enum Source {
    FreeForm(String),
    Template(Box<Bound>),
}

/// An in-progress snippet create or edit.
///
/// # Example
///
/// ```rust
/// use cmsnip::{SnippetDraft, Template};
///
/// let template = Template::new("Greeting", "<p>Hello {{ Name }}</p>").with_id("t1");
/// let mut draft = SnippetDraft::from_template("Welcome Ada", &template);
///
/// assert_eq!(draft.fields().len(), 1);
/// assert_eq!(draft.set_field(0, "Ada").unwrap(), "<p>Hello Ada</p>");
///
/// let payload = draft.payload().unwrap();
/// assert_eq!(payload.fields["Name"], "Ada");
/// assert_eq!(payload.template_id.as_deref(), Some("t1"));
/// ```
#[derive(Debug, Clone)]
pub struct SnippetDraft {
    name: String,
    active: bool,
    mode: SubstitutionMode,
    source: Source,
}

impl SnippetDraft {
    /// Starts a free-form snippet with directly edited content.
    pub fn free_form(name: impl Into<String>, content: impl Into<String>) -> Self {
        SnippetDraft {
            name: name.into(),
            active: true,
            mode: SubstitutionMode::default(),
            source: Source::FreeForm(content.into()),
        }
    }

    /// Starts a snippet from `template` with every field empty.
    pub fn from_template(name: impl Into<String>, template: &Template) -> Self {
        let mode = SubstitutionMode::default();
        SnippetDraft {
            name: name.into(),
            active: true,
            mode,
            source: Source::Template(Box::new(Bound::new(template, mode, None))),
        }
    }

    /// Reopens a stored snippet for editing.
    ///
    /// Templated snippets need their template: fields are extracted from its
    /// decoded content and prefilled from the snippet's saved values, then
    /// re-rendered. Free-form snippets keep their stored content.
    pub fn edit(snippet: &Snippet, template: Option<&Template>) -> Result<Self, DraftError> {
        let mode = SubstitutionMode::default();
        let source = match (&snippet.template_id, template) {
            (Some(expected), Some(template)) => {
                if template.id.as_deref() != Some(expected.as_str()) {
                    return Err(DraftError::TemplateMismatch {
                        expected: expected.clone(),
                        found: template.id.clone().unwrap_or_default(),
                    });
                }
                Source::Template(Box::new(Bound::new(template, mode, Some(&snippet.fields))))
            }
            (Some(expected), None) => {
                log::warn!(
                    "template '{}' unavailable, editing snippet '{}' as free-form",
                    expected,
                    snippet.name
                );
                Source::FreeForm(snippet.content.clone())
            }
            (None, _) => Source::FreeForm(snippet.content.clone()),
        };

        Ok(SnippetDraft {
            name: snippet.name.clone(),
            active: snippet.active,
            mode,
            source,
        })
    }

    /// Switches substitution mode and re-renders.
    pub fn with_mode(mut self, mode: SubstitutionMode) -> Self {
        self.mode = mode;
        if let Source::Template(bound) = &mut self.source {
            bound.rerender(mode);
        }
        self
    }

    /// Selects a (different) template, discarding current field values.
    pub fn select_template(&mut self, template: &Template) {
        log::debug!("draft '{}' now uses template '{}'", self.name, template.name);
        self.source = Source::Template(Box::new(Bound::new(template, self.mode, None)));
    }

    /// Sets the value of the field at `index` and returns the new content.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) -> Result<&str, DraftError> {
        let mode = self.mode;
        match &mut self.source {
            Source::FreeForm(_) => Err(DraftError::NotTemplated),
            Source::Template(bound) => {
                let len = bound.fields.len();
                let field = bound
                    .fields
                    .get_mut(index)
                    .ok_or(DraftError::FieldOutOfRange { index, len })?;
                let value = value.into();
                field.value = value.clone();

                // Shared-text occurrences are one target; keep their inputs equal.
                if mode == SubstitutionMode::SharedText {
                    let original = field.original.clone();
                    for sibling in bound.fields.iter_mut().filter(|f| f.original == original) {
                        sibling.value = value.clone();
                    }
                }
                bound.rerender(mode);
                Ok(&bound.rendered.content)
            }
        }
    }

    /// Replaces the content of a free-form draft.
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), DraftError> {
        match &mut self.source {
            Source::FreeForm(current) => {
                *current = content.into();
                Ok(())
            }
            Source::Template(bound) => Err(DraftError::TemplateBound(bound.template_name.clone())),
        }
    }

    /// Renames the draft.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The snippet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active flag.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The substitution mode in use.
    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    /// Returns `true` if the content comes from a template.
    pub fn is_templated(&self) -> bool {
        matches!(self.source, Source::Template(_))
    }

    /// Current fields in document order; empty for free-form drafts.
    pub fn fields(&self) -> &[Field] {
        match &self.source {
            Source::FreeForm(_) => &[],
            Source::Template(bound) => &bound.fields,
        }
    }

    /// Current field values by label; empty for free-form drafts.
    pub fn form_data(&self) -> FormData {
        match &self.source {
            Source::FreeForm(_) => FormData::new(),
            Source::Template(bound) => bound.rendered.form_data.clone(),
        }
    }

    /// The current content: rendered, or as typed for free-form drafts.
    pub fn content(&self) -> &str {
        match &self.source {
            Source::FreeForm(content) => content,
            Source::Template(bound) => &bound.rendered.content,
        }
    }

    /// A sandboxed preview of the current content.
    pub fn preview(&self, style_reset: &str) -> PreviewDocument {
        PreviewDocument::new(self.content()).with_style_reset(style_reset)
    }

    /// Assembles the payload for the create/update operation.
    ///
    /// Name and content are required.
    pub fn payload(&self) -> Result<SnippetPayload, DraftError> {
        require(&self.name, "name for the snippet")?;
        require(self.content(), "snippet content")?;

        let template_id = match &self.source {
            Source::FreeForm(_) => None,
            Source::Template(bound) => bound.template_id.clone(),
        };

        Ok(SnippetPayload {
            name: self.name.trim().to_string(),
            content: self.content().to_string(),
            fields: self.form_data(),
            template_id,
            active: self.active,
        })
    }
}

/// An in-progress template create or edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDraft {
    name: String,
    content: String,
    active: bool,
}

impl TemplateDraft {
    /// Starts a new, active template.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        TemplateDraft {
            name: name.into(),
            content: content.into(),
            active: true,
        }
    }

    /// Reopens a stored template, decoding its content for editing.
    pub fn edit(template: &Template) -> Self {
        TemplateDraft {
            name: template.name.clone(),
            content: decode_html(&template.content).into_owned(),
            active: template.active,
        }
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Renames the draft.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Distinct placeholder labels the template will ask for.
    pub fn placeholders(&self) -> Vec<String> {
        extract_fields(&self.content)
            .labels()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// A sandboxed preview of the raw template.
    pub fn preview(&self, style_reset: &str) -> PreviewDocument {
        PreviewDocument::new(self.content.as_str()).with_style_reset(style_reset)
    }

    /// Assembles the payload for the create/update operation.
    pub fn payload(&self) -> Result<TemplatePayload, DraftError> {
        require(&self.name, "name for the template")?;
        require(&self.content, "template content")?;

        Ok(TemplatePayload {
            name: self.name.trim().to_string(),
            content: self.content.clone(),
            active: self.active,
        })
    }
}
