use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

/// Lower-case, whitespace-split, and stem a raw query into its term stems.
/// Morphological variants collapse to one stem ("running", "runs" → "run").
pub fn stem_terms(query: &str) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    query
        .split_whitespace()
        .map(|term| stemmer.stem(&term.to_lowercase()).into_owned())
        .collect()
}

/// Wrap every word of `text` whose stem matches a stem of `query` in
/// `<strong>` tags. Whole-word matching only; the original (unstemmed,
/// case-preserved) word is what gets wrapped.
///
/// Words are rejoined with single spaces, so runs of whitespace in `text`
/// collapse. Exact-layout preservation is out of scope for this variant;
/// use [`super::highlight_first`] when spacing must survive.
pub fn highlight(text: &str, query: &str) -> String {
    let stems: HashSet<String> = stem_terms(query).into_iter().collect();
    if stems.is_empty() {
        return text.to_string();
    }

    let stemmer = Stemmer::create(Algorithm::English);
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            if stems.contains(stemmer.stem(&word.to_lowercase()).as_ref()) {
                format!("<strong>{word}</strong>")
            } else {
                word.to_string()
            }
        })
        .collect();

    words.join(" ")
}
