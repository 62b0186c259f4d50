//! Plain-text extraction from raw markup.
//!
//! Non-content elements are dropped from the tree together with their
//! content, the remaining text is collected, and whitespace runs are
//! collapsed into one fragment per line.

use crate::dom;

/// Elements removed before text is collected.
pub const NON_CONTENT_TAGS: [&str; 7] = ["script", "style", "meta", "link", "footer", "nav", "header"];

/// Characters that end a line, following universal-newline rules.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whitespace for trimming fragments: Unicode `White_Space` plus the
/// information separators U+001C to U+001F.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Extracts visible text from an HTML document.
///
/// Returns an empty string when nothing is left outside the removed
/// elements. The output never contains markup.
///
/// # Example
///
/// ```rust
/// use semantic_harvester::extract_text;
///
/// let html = "<html><body><nav>Menu</nav><p>Hello   world</p></body></html>";
/// assert_eq!(extract_text(html), "Hello\nworld");
/// ```
#[must_use]
pub fn extract_text(html: &str) -> String {
    let document = dom::parse(html);
    let removed = dom::remove_elements(&document, &NON_CONTENT_TAGS);
    tracing::debug!(removed, "dropped non-content elements");

    let text = dom::document_text(&document);
    collapse_whitespace(&text)
}

/// Splits text into lines and double-space separated fragments, trims each
/// fragment and joins the non-empty ones with `\n`.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_line_break)
        .map(|line| line.trim_matches(is_trimmable))
        .flat_map(|line| line.split("  "))
        .map(|fragment| fragment.trim_matches(is_trimmable))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_splits_on_double_spaces() {
        assert_eq!(collapse_whitespace("  one  two   three  "), "one\ntwo\nthree");
    }

    #[test]
    fn collapse_keeps_single_spaces() {
        assert_eq!(collapse_whitespace("one two\nthree four"), "one two\nthree four");
    }

    #[test]
    fn collapse_drops_blank_lines() {
        assert_eq!(collapse_whitespace("\n\n  a \r\n\r\n\t b\t\n\n"), "a\nb");
    }

    #[test]
    fn collapse_trims_unit_separator() {
        assert_eq!(collapse_whitespace("\u{1f}alpha\u{1f}\n \u{1f} \nbeta"), "alpha\nbeta");
    }

    #[test]
    fn collapse_handles_unicode_line_separators() {
        assert_eq!(collapse_whitespace("a\u{2028}b\u{85}c\u{0c}d"), "a\nb\nc\nd");
    }

    #[test]
    fn collapse_of_whitespace_only_is_empty() {
        assert_eq!(collapse_whitespace(" \n \t \r\n "), "");
    }

    #[test]
    fn extract_removes_every_non_content_kind() {
        let html = r#"
            <html>
              <head>
                <title>Title text</title>
                <meta name="description" content="META_CONTENT">
                <link rel="stylesheet" href="x.css">
                <style>.STYLE_RULE { color: red; }</style>
                <script>var SCRIPT_VAR = 1;</script>
              </head>
              <body>
                <header>HEADER_TEXT</header>
                <nav>NAV_TEXT</nav>
                <p>Body text</p>
                <footer>FOOTER_TEXT</footer>
              </body>
            </html>
        "#;

        let text = extract_text(html);
        assert_eq!(text, "Title text\nBody text");
    }

    #[test]
    fn extract_decodes_entities_without_markup() {
        let text = extract_text("<p>Fish &amp; chips&nbsp;</p>");
        assert_eq!(text, "Fish & chips");
    }
}
