//! Command handlers.
//!
//! Each handler reads its input, does the work through the `cmsnip` crates
//! and returns serializable data for the output layer.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use cmsnip::cmsnip_seeker::{next_page_limit, Page, Paged};
use cmsnip::cmsnip_template::{
    extract_decoded, extract_fields, Extraction, Field, FormData, PreviewDocument, Rendered,
};
use cmsnip::{
    search_snippets, search_templates, search_users, truncate_text, Config, Snippet, Template,
    User,
};

use crate::cli::{BindArgs, FieldsArgs, PreviewArgs, RecordKind, RenderArgs, SearchArgs};

#[derive(Debug, Serialize)]
pub struct FieldRow {
    pub index: usize,
    pub label: String,
    pub original: String,
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct FieldsView {
    pub fields: Vec<FieldRow>,
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewView {
    pub document: String,
    pub srcdoc: String,
    pub role: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SearchRow {
    pub id: String,
    pub title: String,
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchView<T: Serialize> {
    pub rows: Vec<SearchRow>,
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub next_limit: usize,
    pub results: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn extract_file(path: &Path, decode: bool) -> Result<Extraction> {
    let content = read_file(path)?;
    Ok(if decode {
        extract_decoded(&content)
    } else {
        extract_fields(&content)
    })
}

/// Lists placeholder occurrences.
pub fn fields(args: &FieldsArgs) -> Result<FieldsView> {
    let extraction = extract_file(&args.file, args.decode)?;

    let labels = extraction.labels().into_iter().map(str::to_string).collect();
    let fields = extraction
        .into_fields()
        .into_iter()
        .enumerate()
        .map(|(index, field)| FieldRow {
            index,
            label: field.label,
            original: field.original,
            offset: field.offset,
        })
        .collect();

    Ok(FieldsView { fields, labels })
}

/// Binds values onto the extracted fields: saved data, then labels, then indexes.
fn bind(extraction: &Extraction, args: &BindArgs) -> Result<Vec<Field>> {
    let mut fields = match &args.saved {
        Some(json) => {
            let saved: FormData =
                serde_json::from_str(json).context("--saved must be a JSON object of strings")?;
            extraction.prefill(&saved)
        }
        None => extraction.fields().to_vec(),
    };

    for (label, value) in &args.set {
        let mut found = false;
        for field in fields.iter_mut().filter(|f| &f.label == label) {
            field.value = value.clone();
            found = true;
        }
        if !found {
            bail!(
                "no placeholder labelled '{}' (labels: {})",
                label,
                extraction.labels().join(", ")
            );
        }
    }

    for (index, value) in &args.at {
        let len = fields.len();
        match fields.get_mut(*index) {
            Some(field) => field.value = value.clone(),
            None => bail!("field {} does not exist ({} placeholders)", index, len),
        }
    }

    Ok(fields)
}

fn render_file(path: &Path, args: &BindArgs, config: &Config) -> Result<Rendered> {
    let extraction = extract_file(path, args.decode)?;
    let fields = bind(&extraction, args)?;
    let mode = args.mode.unwrap_or(config.substitution);
    Ok(extraction.render_with(mode, &fields))
}

/// Renders a template with the given values.
pub fn render(args: &RenderArgs, config: &Config) -> Result<Rendered> {
    render_file(&args.file, &args.bind, config)
}

/// Builds the sandboxed preview for a rendered template.
pub fn preview(args: &PreviewArgs, config: &Config) -> Result<PreviewView> {
    let rendered = render_file(&args.file, &args.bind, config)?;
    let document =
        PreviewDocument::new(rendered.content).with_style_reset(config.preview.style_reset.as_str());

    let srcdoc = document.srcdoc();
    Ok(PreviewView {
        document: if args.iframe {
            document.to_iframe()
        } else {
            srcdoc.clone()
        },
        srcdoc,
        role: cmsnip::cmsnip_template::PREVIEW_ROLE,
    })
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let source = read_file(path)?;
    serde_json::from_str(&source)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))
}

fn view<T, F>(paged: Paged<&T>, truncate_length: usize, row: F) -> SearchView<T>
where
    T: Serialize + Clone,
    F: Fn(&T, usize) -> SearchRow,
{
    SearchView {
        rows: paged.items.iter().map(|&item| row(item, truncate_length)).collect(),
        next_limit: next_page_limit(paged.limit),
        items: paged.items.into_iter().cloned().collect(),
        page: paged.page,
        limit: paged.limit,
        results: paged.results,
        total_count: paged.total_count,
        total_pages: paged.total_pages,
    }
}

fn content_row(id: Option<&str>, name: &str, created_by: Option<&str>, len: usize) -> SearchRow {
    SearchRow {
        id: id.unwrap_or("-").to_string(),
        title: truncate_text(name, len),
        detail: created_by.map(str::to_string),
    }
}

/// Output of a search: one view type per record kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchOutput {
    Snippets(SearchView<Snippet>),
    Templates(SearchView<Template>),
    Users(SearchView<User>),
}

/// Searches an exported record list.
pub fn search(args: &SearchArgs, config: &Config) -> Result<SearchOutput> {
    let page = Page::new(args.page, args.limit.unwrap_or(config.page_limit))?;
    let len = config.truncate_length;
    log::debug!("searching {:?} for '{}' on page {}", args.kind, args.query, args.page);

    Ok(match args.kind {
        RecordKind::Snippets => {
            let records: Vec<Snippet> = read_records(&args.file)?;
            let paged = search_snippets(&records, &args.query, page);
            SearchOutput::Snippets(view(paged, len, |s, len| {
                content_row(s.id.as_deref(), &s.name, s.audit.content_created_by.as_deref(), len)
            }))
        }
        RecordKind::Templates => {
            let records: Vec<Template> = read_records(&args.file)?;
            let paged = search_templates(&records, &args.query, page);
            SearchOutput::Templates(view(paged, len, |t, len| {
                content_row(t.id.as_deref(), &t.name, t.audit.content_created_by.as_deref(), len)
            }))
        }
        RecordKind::Users => {
            let records: Vec<User> = read_records(&args.file)?;
            let paged = search_users(&records, &args.query, page);
            SearchOutput::Users(view(paged, len, |u, _| SearchRow {
                id: u.id.as_deref().unwrap_or("-").to_string(),
                title: u.email.clone(),
                detail: Some(u.role.to_string()),
            }))
        }
    })
}
