/// Escape `&`, `"`, `<`, and `>` for safe interpolation into HTML text and
/// attribute positions. Single pass, so `&` in the input is escaped before
/// the entities produced for the other characters ever exist.
///
/// Not idempotent: escaping already-escaped text double-escapes it.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
