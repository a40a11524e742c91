//! cmSnip - templates, snippets and the sessions that edit them.
//!
//! Templates are HTML documents with `{{label}}` placeholders. A snippet is
//! either typed free-form or instantiated from a template by filling in a
//! value per placeholder. This crate holds the stored records, the role
//! guard in front of every operation, editing sessions that keep content and
//! field values in sync, and searchable list views.
//!
//! Placeholder extraction and rendering live in [`cmsnip_template`]; search
//! and paging in [`cmsnip_seeker`]. Both are re-exported here.
//!
//! # Quick Start
//!
//! ```rust
//! use cmsnip::{authorize, Action, Config, MockEnv, Role, SnippetDraft, Template};
//!
//! let config = Config::load(None, &MockEnv::new()).unwrap();
//! authorize(Role::Editor, Action::CreateContent).unwrap();
//!
//! let template = Template::new("Letter", "<p>Dear {{Name}},</p>").with_id("t1");
//! let mut draft = SnippetDraft::from_template("Letter to Ada", &template)
//!     .with_mode(config.substitution);
//! draft.set_field(0, "Ada").unwrap();
//!
//! let payload = draft.payload().unwrap();
//! assert_eq!(payload.content, "<p>Dear Ada,</p>");
//! ```

mod access;
mod config;
mod draft;
mod error;
mod listing;
mod record;
mod text;

pub use access::{authorize, Action, Role};
pub use config::{
    Config, EnvReader, MockEnv, PreviewConfig, RealEnv, ENV_PAGE_LIMIT, ENV_SUBSTITUTION,
};
pub use draft::{SnippetDraft, SnippetPayload, TemplateDraft, TemplatePayload};
pub use error::{AccessError, ConfigError, DraftError};
pub use listing::{
    search_snippets, search_templates, search_users, snippet_accessor, snippets_from_template,
    template_accessor, user_accessor, CONTENT_SEARCH_FIELDS, USER_SEARCH_FIELDS,
};
pub use record::{format_timestamp, Audit, Snippet, Template, User, NO_CHANGES};
pub use text::{to_camel_case, truncate_text, DEFAULT_TRUNCATE_LENGTH};

pub use cmsnip_seeker;
pub use cmsnip_template;
