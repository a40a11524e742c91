//! Small string helpers for list views and form ids.

/// Default cut-off used when listing names.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 15;

/// Shortens `text` to `length` characters followed by `...`.
///
/// Text of at most `length` characters is returned unchanged.
///
/// ```rust
/// use cmsnip::truncate_text;
///
/// assert_eq!(truncate_text("Quarterly newsletter", 9), "Quarterly...");
/// assert_eq!(truncate_text("Short", 9), "Short");
/// ```
pub fn truncate_text(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Builds an identifier from a label: whitespace removed, first character
/// lowercased.
///
/// ```rust
/// use cmsnip::to_camel_case;
///
/// assert_eq!(to_camel_case("First Name"), "firstName");
/// ```
pub fn to_camel_case(text: &str) -> String {
    let mut chars = text.chars().filter(|c| !c.is_whitespace());
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_at_boundary() {
        assert_eq!(truncate_text("exactly fifteen", DEFAULT_TRUNCATE_LENGTH), "exactly fifteen");
        assert_eq!(
            truncate_text("exactly sixteen!", DEFAULT_TRUNCATE_LENGTH),
            "exactly sixteen..."
        );
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
        assert_eq!(truncate_text("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate_text("abc", 0), "...");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("Company Name"), "companyName");
        assert_eq!(to_camel_case("  leading  space"), "leadingspace");
        assert_eq!(to_camel_case("ALL CAPS"), "aLLCAPS");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("   "), "");
    }
}
