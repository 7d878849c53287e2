//! Status Region Markup
//!
//! Builders for everything the handlers render: status paragraphs and the
//! ranked result list. Pure string building; the response objects themselves
//! are never mutated.

use crate::highlight::highlight_terms;
use crate::types::SearchHit;

pub fn error(text: &str) -> String {
    format!("<p class=\"error\">{}</p>", text)
}

pub fn success(text: &str) -> String {
    format!("<p class=\"success\">{}</p>", text)
}

pub fn pending(text: &str) -> String {
    format!("<p>{}</p>", text)
}

pub fn no_results() -> String {
    "<p>No results found</p>".to_string()
}

/// Render the ranked hit list in the order the node returned it.
///
/// Each hit shows its title, the snippet with query terms highlighted, and
/// the similarity (`1 - distance`) to three decimal places.
pub fn search_results(hits: &[SearchHit], query: &str) -> String {
    let mut html = String::from("<h3>Search Results:</h3>");

    for hit in hits {
        let snippet = highlight_terms(&hit.snippet, query);
        html.push_str(&format!(
            "<div class=\"result-item\"><h3>{}</h3><p>{}</p><p class=\"similarity\">Similarity: {:.3}</p></div>",
            hit.title,
            snippet,
            1.0 - hit.distance
        ));
    }

    html
}
