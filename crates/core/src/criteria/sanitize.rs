/// Punctuation kept by [`sanitize_search_term`].
const KEPT_PUNCTUATION: &[char] = &['-', '.', '_', '(', ')', '@', '/', '[', ']', '+', '%', ':'];

/// Strip characters trackers choke on and normalize whitespace.
///
/// Letters, digits, whitespace and a small set of punctuation survive;
/// everything else (quotes, `!`, `?`, `&` ...) is dropped. Whitespace runs
/// collapse to a single space.
pub fn sanitize_search_term(term: &str) -> String {
    let kept: String = term
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(c))
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Build a SQL-LIKE pattern from free text.
///
/// Every run of non-word characters becomes `%` and the result is wrapped
/// in `%`, so `"the wire"` gives `%the%wire%`. Returns `None` when the
/// term has no word characters at all.
pub fn wildcard_pattern(term: &str) -> Option<String> {
    let words: Vec<&str> = term
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return None;
    }

    Some(format!("%{}%", words.join("%")))
}
