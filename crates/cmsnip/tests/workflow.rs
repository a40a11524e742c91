//! End-to-end editing sessions: guard, draft, payload, stored record, reopen.

use chrono::{TimeZone, Utc};
use cmsnip::{
    authorize, search_snippets, truncate_text, Action, Config, DraftError, MockEnv, Role,
    Snippet, SnippetDraft, Template, TemplateDraft, ENV_SUBSTITUTION, NO_CHANGES,
};
use cmsnip::cmsnip_seeker::Page;
use cmsnip::cmsnip_template::SubstitutionMode;

// ============================================================================
// Helpers
// ============================================================================

fn store(template_id: &str, draft: &SnippetDraft, by: &str) -> Snippet {
    let payload = draft.payload().unwrap();
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();

    let mut snippet = Snippet::new(payload.name, payload.content).with_id("s1");
    snippet.fields = payload.fields;
    snippet.template_id = payload.template_id;
    snippet.active = payload.active;
    snippet.audit.stamp_created(by, &at);
    assert_eq!(snippet.template_id.as_deref(), Some(template_id));
    snippet
}

fn invitation() -> Template {
    let draft = TemplateDraft::new(
        "Invitation",
        "<h1>{{ Event }}</h1><p>Dear {{Guest}}, join us for {{ Event }}.</p>",
    );
    assert_eq!(draft.placeholders(), ["Event", "Guest"]);

    let payload = draft.payload().unwrap();
    Template::new(payload.name, payload.content).with_id("t-inv")
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn create_then_reopen_snippet() {
    authorize(Role::Editor, Action::CreateContent).unwrap();
    let template = invitation();

    let mut draft = SnippetDraft::from_template("Launch invite", &template);
    assert_eq!(draft.fields().len(), 3);
    draft.set_field(1, "Ada").unwrap();
    draft.set_field(0, "Launch").unwrap();

    // Both `{{ Event }}` inputs follow the edit to field 0.
    assert_eq!(draft.fields()[2].value, "Launch");
    assert_eq!(
        draft.content(),
        "<h1>Launch</h1><p>Dear Ada, join us for Launch.</p>"
    );
    assert_eq!(draft.form_data()["Event"], "Launch");

    let stored = store("t-inv", &draft, "ada@example.com");
    assert_eq!(stored.audit.content_updated_by, NO_CHANGES);
    assert_eq!(stored.audit.content_created_at.as_deref(), Some("17/10/2026, 08:30:00"));

    authorize(Role::Editor, Action::UpdateContent).unwrap();
    let mut reopened = SnippetDraft::edit(&stored, Some(&template)).unwrap();
    assert_eq!(reopened.content(), stored.content);

    reopened.set_field(1, "Grace").unwrap();
    assert_eq!(
        reopened.payload().unwrap().content,
        "<h1>Launch</h1><p>Dear Grace, join us for Launch.</p>"
    );
}

#[test]
fn per_occurrence_from_config() {
    let env = MockEnv::new().with_var(ENV_SUBSTITUTION, "per-occurrence");
    let config = Config::load(None, &env).unwrap();
    assert_eq!(config.substitution, SubstitutionMode::PerOccurrence);

    let mut draft =
        SnippetDraft::from_template("Two events", &invitation()).with_mode(config.substitution);
    draft.set_field(0, "Opening").unwrap();
    draft.set_field(1, "Ada").unwrap();
    draft.set_field(2, "Closing").unwrap();

    assert_eq!(
        draft.content(),
        "<h1>Opening</h1><p>Dear Ada, join us for Closing.</p>"
    );
}

#[test]
fn viewers_cannot_write() {
    let err = authorize(Role::Viewer, Action::CreateContent).unwrap_err();
    assert!(err.to_string().starts_with("403"));
    assert!(authorize(Role::Viewer, Action::OpenEditor).is_ok());
}

#[test]
fn stale_template_is_rejected() {
    let template = invitation();
    let mut draft = SnippetDraft::from_template("Invite", &template);
    draft.set_field(0, "Launch").unwrap();
    let stored = store("t-inv", &draft, "ada@example.com");

    let other = Template::new("Other", "{{X}}").with_id("t-other");
    assert!(matches!(
        SnippetDraft::edit(&stored, Some(&other)),
        Err(DraftError::TemplateMismatch { .. })
    ));
}

#[test]
fn stored_snippets_are_searchable() {
    let template = invitation();
    let snippets: Vec<Snippet> = ["Launch invite", "Board invite", "Newsletter"]
        .into_iter()
        .map(|name| {
            let mut draft = SnippetDraft::from_template(name, &template);
            draft.set_field(0, "Event").unwrap();
            store("t-inv", &draft, "ada@example.com")
        })
        .collect();

    let config = Config::default();
    let page = search_snippets(&snippets, "INVITE", Page::new(1, config.page_limit).unwrap());
    assert_eq!(page.total_count, 2);

    let names: Vec<_> = page
        .items
        .iter()
        .map(|s| truncate_text(&s.name, config.truncate_length))
        .collect();
    assert_eq!(names, ["Launch invite", "Board invite"]);

    let everything = search_snippets(&snippets, "ada@example", Page::new(2, 2).unwrap());
    assert_eq!(everything.results, 1);
    assert_eq!(everything.total_pages, 2);
}
