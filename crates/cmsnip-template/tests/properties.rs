//! Property-based tests for extraction and rendering.

use std::collections::BTreeSet;

use cmsnip_template::{extract_fields, Field, SubstitutionMode};
use proptest::prelude::*;
use regex::Regex;

// ============================================================================
// Strategies
// ============================================================================

/// Text that can never form or close a marker.
fn text_piece() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/=\"\n\r\u{2028}.,!]{0,12}"
}

fn placeholder_piece() -> impl Strategy<Value = String> {
    ("[ ]{0,2}", "[a-zA-Z.*+?()]{0,8}", "[ ]{0,2}")
        .prop_map(|(lead, label, trail)| format!("{{{{{lead}{label}{trail}}}}}"))
}

fn template_content() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![text_piece(), placeholder_piece()], 0..12)
        .prop_map(|pieces| pieces.concat())
}

fn bind_all(fields: &[Field], value: impl Fn(usize) -> String) -> Vec<Field> {
    fields
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, field)| field.with_value(value(i)))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// One field per pattern match, in document order.
    #[test]
    fn field_count_matches_pattern_count(content in template_content()) {
        let pattern = Regex::new(r"\{\{([^\n\r\x{2028}\x{2029}]*?)\}\}").unwrap();
        let extraction = extract_fields(&content);

        prop_assert_eq!(extraction.len(), pattern.find_iter(&content).count());

        let offsets: Vec<usize> = extraction.fields().iter().map(|f| f.offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        prop_assert_eq!(offsets, sorted);
    }

    /// Every field's original text sits at its offset.
    #[test]
    fn originals_sit_at_offsets(content in template_content()) {
        let extraction = extract_fields(&content);
        for field in extraction.fields() {
            prop_assert_eq!(&content[field.span()], field.original.as_str());
            prop_assert_eq!(field.label.as_str(), field.label.trim());
        }
    }

    /// Form data has exactly one key per distinct label, all empty.
    #[test]
    fn form_data_keys_are_distinct_labels(content in template_content()) {
        let extraction = extract_fields(&content);
        let labels: BTreeSet<&str> = extraction.fields().iter().map(|f| f.label.as_str()).collect();
        let keys: BTreeSet<&str> = extraction.form_data().keys().map(String::as_str).collect();

        prop_assert_eq!(labels, keys);
        prop_assert!(extraction.form_data().values().all(String::is_empty));
    }

    /// Rendering unbound fields returns the content unchanged, in both modes.
    #[test]
    fn unbound_render_is_identity(content in template_content()) {
        let extraction = extract_fields(&content);

        let shared = extraction.render_with(SubstitutionMode::SharedText, extraction.fields());
        let positional = extraction.render_with(SubstitutionMode::PerOccurrence, extraction.fields());

        prop_assert_eq!(&shared.content, &content);
        prop_assert_eq!(&positional.content, &content);
    }

    /// Rendering with no fields at all is also the identity.
    #[test]
    fn empty_field_list_is_identity(content in template_content()) {
        let extraction = extract_fields(&content);
        prop_assert_eq!(extraction.render(&[]).content, content);
    }

    /// With every occurrence bound, no placeholder survives.
    #[test]
    fn fully_bound_render_removes_markers(content in template_content()) {
        let extraction = extract_fields(&content);
        let fields = bind_all(extraction.fields(), |i| format!("v{i}"));

        for mode in [SubstitutionMode::SharedText, SubstitutionMode::PerOccurrence] {
            let rendered = extraction.render_with(mode, &fields);
            prop_assert_eq!(extract_fields(&rendered.content).len(), 0);
        }
    }

    /// Per-occurrence rendering splices each value at its own position.
    #[test]
    fn per_occurrence_matches_manual_splice(content in template_content()) {
        let extraction = extract_fields(&content);
        let fields = bind_all(extraction.fields(), |i| format!("[{i}]"));

        let mut expected = String::new();
        let mut cursor = 0;
        for field in &fields {
            expected.push_str(&content[cursor..field.offset]);
            expected.push_str(&field.value);
            cursor = field.span().end;
        }
        expected.push_str(&content[cursor..]);

        let rendered = extraction.render_with(SubstitutionMode::PerOccurrence, &fields);
        prop_assert_eq!(rendered.content, expected);
    }

    /// Rendering never mutates the extraction.
    #[test]
    fn render_is_pure(content in template_content(), value in "[a-z]{1,5}") {
        let extraction = extract_fields(&content);
        let before = extraction.clone();
        let fields = bind_all(extraction.fields(), |_| value.clone());

        let first = extraction.render(&fields);
        let second = extraction.render(&fields);

        prop_assert_eq!(&extraction, &before);
        prop_assert_eq!(first, second);
    }
}
