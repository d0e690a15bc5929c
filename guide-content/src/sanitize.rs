//! Allow-list sanitization of untrusted guide HTML.

/// Sanitizes guide HTML against a fixed allow-list.
///
/// Beyond ammonia's safe defaults this permits the attributes the anchor
/// rules depend on (`target`, `rel`, `class`, `id`, `name`, `href`) and the
/// `mark` tag emitted by the highlighter. Everything else is stripped:
/// `<script>`, event handlers, and `javascript:` URLs never survive.
pub struct Sanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        let mut cleaner = ammonia::Builder::default();
        cleaner
            .add_tags(&["mark"])
            .add_generic_attributes(&["target", "rel", "class", "id", "name", "href"])
            // `rel` is on the allow-list, so ammonia's automatic link_rel
            // injection must be off; the anchor rewriter adds rel per rule.
            .link_rel(None);
        Self { cleaner }
    }

    pub fn clean(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags() {
        let clean = Sanitizer::new().clean("<p>ok</p><script>alert(1)</script>");
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
        assert!(clean.contains("<p>ok</p>"));
    }

    #[test]
    fn strips_event_handlers() {
        let clean = Sanitizer::new().clean("<img src=\"x.png\" onerror=\"alert(1)\">");
        assert!(!clean.contains("onerror"));
    }

    #[test]
    fn strips_javascript_urls_but_keeps_text() {
        let clean = Sanitizer::new().clean("<a href=\"javascript:alert(1)\">x</a>");
        assert!(!clean.contains("javascript:"));
        assert!(clean.contains(">x</a>"));
    }

    #[test]
    fn keeps_allow_listed_attributes() {
        let clean = Sanitizer::new().clean(
            "<a href=\"#bookmark1\" class=\"s15\" id=\"ref1\" name=\"n\" \
             target=\"_blank\" rel=\"noopener\">x</a>",
        );
        for attr in ["href", "class", "id", "name", "target", "rel"] {
            assert!(clean.contains(attr), "missing {attr} in {clean}");
        }
    }

    #[test]
    fn keeps_mark_tags() {
        let clean = Sanitizer::new().clean("<p><mark>Tax</mark> rule</p>");
        assert!(clean.contains("<mark>Tax</mark>"));
    }

    #[test]
    fn does_not_inject_rel_on_links() {
        let clean = Sanitizer::new().clean("<a href=\"https://example.com\">x</a>");
        assert!(!clean.contains("rel="));
    }
}
