use regex::Regex;

/// Wrap every occurrence of each query term in the snippet with `<mark>` tags.
///
/// Terms come from whitespace-splitting the lowercased query; terms of two or
/// fewer characters are skipped. Matching is case-insensitive and keeps the
/// snippet's original casing. Terms apply left to right over the already
/// rewritten text, so overlapping terms can nest markers.
///
/// Term text is escaped before the pattern is built, so regex metacharacters
/// in a query match literally instead of changing the match semantics.
pub fn highlight_terms(snippet: &str, query: &str) -> String {
    let mut highlighted = snippet.to_string();

    for term in query.to_lowercase().split_whitespace() {
        if term.chars().count() <= 2 {
            continue;
        }

        let pattern = Regex::new(&format!("(?i){}", regex::escape(term))).unwrap();
        highlighted = pattern
            .replace_all(&highlighted, "<mark>$0</mark>")
            .into_owned();
    }

    highlighted
}

#[cfg(test)]
mod tests {
    use super::highlight_terms;

    #[test]
    fn test_wraps_every_qualifying_term() {
        let marked = highlight_terms("I have a cat and a dog", "cat dog");

        assert_eq!(marked, "I have a <mark>cat</mark> and a <mark>dog</mark>");
    }

    #[test]
    fn test_short_terms_never_wrapped() {
        let marked = highlight_terms("this is it", "is");

        assert_eq!(marked, "this is it");
    }

    #[test]
    fn test_match_is_case_insensitive_and_keeps_casing() {
        let marked = highlight_terms("Cats love CATS", "cats");

        assert_eq!(marked, "<mark>Cats</mark> love <mark>CATS</mark>");
    }

    #[test]
    fn test_all_occurrences_wrapped() {
        let marked = highlight_terms("dog eat dog world", "dog");

        assert_eq!(
            marked,
            "<mark>dog</mark> eat <mark>dog</mark> world"
        );
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let marked = highlight_terms("price is $10 (net)", "$10 (net)");

        assert_eq!(marked, "price is <mark>$10</mark> <mark>(net)</mark>");
    }

    #[test]
    fn test_empty_query_leaves_snippet_untouched() {
        let marked = highlight_terms("nothing to see", "  ");

        assert_eq!(marked, "nothing to see");
    }
}
