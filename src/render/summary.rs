use rust_stemmers::{Algorithm, Stemmer};

const WINDOW_WORDS: usize = 50;
const BACKOFF_WORDS: usize = 25;

/// Extract the densest `WINDOW_WORDS`-word window of `text` with respect to
/// the stemmed query terms, for use as a result summary when the server
/// sends the full document body instead of one.
///
/// Each word position carries a chain value: previous value plus one when the
/// word's stem is a query stem, zero otherwise, so runs of consecutive
/// matching words outweigh the same number of scattered matches. The window
/// with the highest chain-value sum wins, and its end is backed off by
/// `BACKOFF_WORDS` so the match cluster sits mid-window. Words are rejoined
/// with single spaces.
pub fn extract_window(text: &str, stems: &[String]) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= WINDOW_WORDS {
        return words.join(" ");
    }

    let stemmer = Stemmer::create(Algorithm::English);
    let is_match = |word: &str| {
        let stem = stemmer.stem(&word.to_lowercase()).into_owned();
        stems.iter().any(|s| *s == stem)
    };

    // Chain values over the whole text, then the running window score.
    let mut chains = vec![0usize; words.len()];
    for (i, word) in words.iter().enumerate() {
        if is_match(word) {
            chains[i] = if i == 0 { 1 } else { chains[i - 1] + 1 };
        }
    }

    let mut score: usize = chains[..WINDOW_WORDS].iter().sum();
    let mut best_score = score;
    let mut best_end = 0;

    for i in WINDOW_WORDS..words.len() {
        score = score + chains[i] - chains[i - WINDOW_WORDS];
        if score > best_score {
            best_score = score;
            best_end = i;
        }
    }

    // Clamp so the window always spans the full width, even when the best
    // cluster sits at the end of the text.
    let start = best_end
        .saturating_sub(BACKOFF_WORDS)
        .min(words.len() - WINDOW_WORDS);
    words[start..start + WINDOW_WORDS].join(" ")
}
