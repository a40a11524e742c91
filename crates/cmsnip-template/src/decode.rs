//! HTML entity decoding for stored content.
//!
//! Content that was entity-encoded on its way into storage has to be decoded
//! before extraction, otherwise `&#123;&#123;Name&#125;&#125;` is not
//! recognised as a placeholder.

use std::borrow::Cow;

/// Decodes named, decimal and hexadecimal HTML entities.
///
/// Markup is left alone; only entity references are replaced. Returns a
/// borrowed value when there is nothing to decode.
///
/// # Example
///
/// ```rust
/// use cmsnip_template::decode_html;
///
/// assert_eq!(decode_html("&#123;&#123;Name&#125;&#125;"), "{{Name}}");
/// assert_eq!(decode_html("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
/// ```
pub fn decode_html(content: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(content)
}

/// Decodes `content` and extracts its placeholders in one step.
pub fn extract_decoded(content: &str) -> crate::Extraction {
    crate::extract_fields(&decode_html(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(decode_html("no entities here"), Cow::Borrowed(_)));
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(
            decode_html("&lt;p class=&quot;x&quot;&gt;A &amp; B&lt;/p&gt;"),
            "<p class=\"x\">A & B</p>"
        );
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_html("&#123;&#123;X&#x7D;&#x7d;"), "{{X}}");
    }

    #[test]
    fn markup_is_untouched() {
        let html = "<div><b>{{Name}}</b></div>";
        assert_eq!(decode_html(html), html);
    }

    #[test]
    fn encoded_placeholders_become_fields() {
        let extraction = extract_decoded("Dear &#123;&#123; Name &#125;&#125; &amp; co");

        assert_eq!(extraction.labels(), ["Name"]);
        assert_eq!(extraction.content(), "Dear {{ Name }} & co");
    }
}
