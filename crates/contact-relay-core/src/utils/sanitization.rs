/// HTML escaping for user-supplied text
///
/// Escapes the characters that can open a tag, an entity, or close a quoted
/// attribute, so the result is safe both as element text and inside `"..."`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes text and turns each line break into `<br>`
///
/// `\r\n` is treated as a single break.
pub fn text_to_html(text: &str) -> String {
    text.split('\n')
        .map(|line| escape_html(line.strip_suffix('\r').unwrap_or(line)))
        .collect::<Vec<_>>()
        .join("<br>")
}
