//! Output rendering.
//!
//! Structured formats serialize command data directly; text output renders
//! the same data through a named MiniJinja template.

use minijinja::{Environment, Value};
use serde::Serialize;
use thiserror::Error;

use crate::cli::OutputFormat;

/// Errors that can occur while producing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

const FIELDS: &str = "\
{%- if fields %}
{%- for f in fields %}
{{ f.index }}  {{ f.label }}  {{ f.original }} @{{ f.offset }}
{%- endfor %}
{%- else %}
no placeholders
{%- endif %}
";

const RENDER: &str = "{{ content }}";

const PREVIEW: &str = "{{ document }}";

const SEARCH: &str = "\
{%- for row in rows %}
{{ row.id }}  {{ row.title }}{% if row.detail %}  ({{ row.detail }}){% endif %}
{%- else %}
no matches
{%- endfor %}
page {{ page }} of {{ total_pages }} ({{ total_count }} match{% if total_count != 1 %}es{% endif %}, {{ limit }} per page, next size {{ next_limit }})
";

/// Text templates, one per command.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, OutputError> {
        let mut env = Environment::new();
        env.add_template("fields", FIELDS)?;
        env.add_template("render", RENDER)?;
        env.add_template("preview", PREVIEW)?;
        env.add_template("search", SEARCH)?;
        Ok(Templates { env })
    }

    /// Renders `data` with the named text template.
    pub fn render_text<T: Serialize>(&self, name: &str, data: &T) -> Result<String, OutputError> {
        let template = self.env.get_template(name)?;
        let text = template.render(Value::from_serialize(data))?;
        Ok(text.trim_start_matches('\n').to_string())
    }

    /// Produces output for `data` in `format`.
    pub fn format<T: Serialize>(
        &self,
        name: &str,
        data: &T,
        format: OutputFormat,
    ) -> Result<String, OutputError> {
        match format {
            OutputFormat::Text => self.render_text(name, data),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn empty_field_list() {
        let templates = Templates::new().unwrap();
        let text = templates
            .render_text("fields", &json!({ "fields": [] }))
            .unwrap();
        assert_eq!(text, "no placeholders");
    }

    #[test]
    fn content_is_not_escaped() {
        let templates = Templates::new().unwrap();
        let text = templates
            .render_text("render", &json!({ "content": "<b>\"x\" & y</b>" }))
            .unwrap();
        assert_eq!(text, "<b>\"x\" & y</b>");
    }

    #[test]
    fn structured_formats_skip_templates() {
        let templates = Templates::new().unwrap();
        let data = json!({ "content": "x" });

        let json = templates.format("render", &data, OutputFormat::Json).unwrap();
        assert_eq!(json, "{\n  \"content\": \"x\"\n}");

        let yaml = templates.format("render", &data, OutputFormat::Yaml).unwrap();
        assert_eq!(yaml, "content: x\n");
    }
}
