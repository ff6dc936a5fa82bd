pub const ELLIPSIS_MARKER: &str = " ...";
pub const TITLE_LIMIT: usize = 1020;
pub const DESCRIPTION_LIMIT: usize = 1020;
pub const SOURCE_LIMIT: usize = 60;

/// Keeps the first `limit` characters and appends [`ELLIPSIS_MARKER`] once if
/// anything was cut.
pub fn truncate_with_marker(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_with_marker("hello", TITLE_LIMIT), "hello");
        assert_eq!(truncate_with_marker("", SOURCE_LIMIT), "");
    }

    #[test]
    fn text_at_limit_is_unchanged() {
        let text = "x".repeat(TITLE_LIMIT);
        assert_eq!(truncate_with_marker(&text, TITLE_LIMIT), text);
    }

    #[test]
    fn text_over_limit_is_cut_and_marked_once() {
        let text = "y".repeat(TITLE_LIMIT + 500);
        let truncated = truncate_with_marker(&text, TITLE_LIMIT);

        assert_eq!(truncated.len(), TITLE_LIMIT + ELLIPSIS_MARKER.len());
        assert!(truncated.starts_with(&"y".repeat(TITLE_LIMIT)));
        assert!(truncated.ends_with(ELLIPSIS_MARKER));
        assert_eq!(truncated.matches("...").count(), 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "ü".repeat(SOURCE_LIMIT + 1);
        let truncated = truncate_with_marker(&text, SOURCE_LIMIT);

        assert_eq!(truncated.chars().count(), SOURCE_LIMIT + ELLIPSIS_MARKER.len());
        assert_eq!(
            truncated.trim_end_matches(ELLIPSIS_MARKER),
            "ü".repeat(SOURCE_LIMIT)
        );
    }
}
