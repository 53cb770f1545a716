/// Wrap the first occurrence of each query term in `<strong>` tags.
///
/// Terms are matched as literal, case-insensitive substrings of the
/// progressively rewritten text; each term marks only its first occurrence,
/// later occurrences are left alone. Original spacing and punctuation are
/// preserved. Unknown terms and empty queries leave the text unchanged.
pub fn highlight_first(text: &str, query: &str) -> String {
    let mut out = text.to_string();
    for term in query.split(' ') {
        if term.is_empty() {
            continue;
        }
        if let Some((start, end)) = find_ignore_case(&out, term) {
            out = format!(
                "{}<strong>{}</strong>{}",
                &out[..start],
                &out[start..end],
                &out[end..]
            );
        }
    }
    out
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`. Literal comparison char by char, so nothing in `needle` is
/// ever treated as a pattern.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].chars();
        let mut end = start;
        let mut matched = true;
        for n in needle.chars() {
            match rest.next() {
                Some(c) if c.to_lowercase().eq(n.to_lowercase()) => end += c.len_utf8(),
                _ => {
                    matched = false;
                    break;
                }
            }
        }
        if matched {
            return Some((start, end));
        }
    }
    None
}
