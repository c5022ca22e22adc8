//! HTML escaping for escaped-variable output.

/// Append `text` to `out`, replacing the five HTML-significant characters
/// with their entities: `&` `<` `>` `"` `'`.
///
/// Everything else, multi-byte characters included, is appended verbatim.
pub fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
