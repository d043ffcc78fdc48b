//! XML character escaping

/// Escape the five XML special characters.
///
/// Each input character is replaced at most once, so the `&` of an entity
/// produced for `<`, `>`, `"` or `'` is never escaped again. The function is
/// not idempotent: escaping already-escaped text escapes its `&` a second time.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
