//! Search-term highlighting that never touches tag interiors.

use regex::RegexBuilder;

/// Wraps every case-insensitive occurrence of `query` in `<mark>` tags.
///
/// The query is matched as a literal substring (regex metacharacters are
/// escaped). The input is split into alternating tag segments (`<...>`,
/// delimiters inclusive) and text segments by a two-state scan; only text
/// segments are rewritten, so a match can never span a tag boundary and tag
/// contents pass through byte-for-byte.
///
/// An empty `query` or empty `text` is an identity pass.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is always a valid pattern");

    let emit = |out: &mut String, segment: &str, is_tag: bool| {
        if is_tag {
            out.push_str(segment);
        } else {
            out.push_str(&pattern.replace_all(segment, "<mark>${0}</mark>"));
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '<' => {
                if i > start {
                    emit(&mut out, &text[start..i], in_tag);
                }
                in_tag = true;
                start = i;
            }
            '>' => {
                // closes the current segment either way; a stray `>` in
                // running text stays part of a text segment
                emit(&mut out, &text[start..=i], in_tag);
                start = i + 1;
                in_tag = false;
            }
            _ => {}
        }
    }

    if start < text.len() {
        emit(&mut out, &text[start..], in_tag);
    }

    out
}
