//! HTML rendering helpers.

/// Escape text for interpolation into an HTML body
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text and convert newlines to `<br>` for display
pub fn escape_html_multiline(input: &str) -> String {
    escape_html(input).replace('\n', "<br>\n")
}
