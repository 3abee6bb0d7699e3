//! TEXT value escaping (RFC 5545 section 3.3.11).

use std::borrow::Cow;

const ESCAPED: [char; 4] = ['\\', ';', ',', '\n'];

/// Escape a raw text value.
///
/// Backslashes are escaped first so the backslashes inserted for `;`, `,`
/// and newlines are not escaped a second time.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPED) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('\\', "\\\\")
            .replace(';', "\\;")
            .replace(',', "\\,")
            .replace('\n', "\\n"),
    )
}

/// Inverse of [`escape_text`]. Unknown escape sequences are kept as they are.
pub fn unescape_text(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('\\' | ';' | ',')) => out.push(escaped),
            Some('n' | 'N') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
