use regex::Regex;

/// Split text into lowercase word tokens.
///
/// A token is any `\w+` run, so digits and underscores count as word
/// characters. Order and duplicates are preserved; term-frequency math
/// depends on both.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"\b\w+\b").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
