//! DOM operations adapter
//!
//! Thin wrapper over the `dom_query` crate exposing the handful of tree
//! operations the extractor needs: parse, drop whole elements, read text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Text returned by dom_query is a reference-counted StrTendril; it derefs
// to `str`, so callers only allocate when they need owned storage.
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing never fails: malformed markup is repaired the way browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tree Manipulation ===

/// Remove every element with one of the given tag names, content included.
///
/// Returns the number of elements removed.
pub fn remove_elements(doc: &Document, tags: &[&str]) -> usize {
    if tags.is_empty() {
        return 0;
    }
    let selector = tags.join(", ");
    let matched = doc.select(&selector);
    let count = matched.length();
    matched.remove();
    count
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Concatenated text of the whole document, `<head>` included.
#[must_use]
pub fn document_text(doc: &Document) -> StrTendril {
    text_content(&doc.select("html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_read_text() {
        let doc = parse(r#"<div id="main">before <b>bold</b> after</div>"#);
        assert_eq!(text_content(&doc.select("div")), "before bold after".into());
    }

    #[test]
    fn test_remove_elements_drops_content() {
        let doc = parse(
            r#"
            <div>
                <nav>menu</nav>
                <p>content</p>
                <script>var x = 1;</script>
            </div>
        "#,
        );

        let removed = remove_elements(&doc, &["nav", "script"]);

        assert_eq!(removed, 2);
        assert!(doc.select("nav").is_empty());
        assert!(doc.select("script").is_empty());
        assert!(doc.select("p").exists());

        let text = document_text(&doc);
        assert!(text.contains("content"));
        assert!(!text.contains("menu"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn test_remove_nested_matches() {
        let doc = parse("<header><nav><a>Home</a></nav></header><p>body</p>");
        remove_elements(&doc, &["header", "nav"]);

        let text = document_text(&doc);
        assert!(!text.contains("Home"));
        assert!(text.contains("body"));
    }

    #[test]
    fn test_remove_with_no_tags_is_noop() {
        let doc = parse("<p>keep</p>");
        assert_eq!(remove_elements(&doc, &[]), 0);
        assert!(document_text(&doc).contains("keep"));
    }

    #[test]
    fn test_document_text_includes_title() {
        let doc = parse("<html><head><title>Page title</title></head><body>Body</body></html>");
        let text = document_text(&doc);
        assert!(text.contains("Page title"));
        assert!(text.contains("Body"));
    }
}
