use std::borrow::Cow;
use std::fmt::Write as _;

/// HTML-encode free text before it goes on the wire.
///
/// Markup characters become named entities, `'` becomes `&#39;`, and Latin-1
/// supplement characters (U+00A0..=U+00FF) as well as characters outside the Basic
/// Multilingual Plane become numeric entities. Everything else, Persian and Arabic
/// script included, passes through unchanged.
pub fn html_encode(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_encoding) {
        return Cow::Borrowed(input);
    }

    let mut encoded = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '&' => encoded.push_str("&amp;"),
            '\'' => encoded.push_str("&#39;"),
            ch if needs_numeric_entity(ch) => {
                let _ = write!(encoded, "&#{};", u32::from(ch));
            }
            ch => encoded.push(ch),
        }
    }
    Cow::Owned(encoded)
}

fn needs_encoding(ch: char) -> bool {
    matches!(ch, '<' | '>' | '"' | '&' | '\'') || needs_numeric_entity(ch)
}

fn needs_numeric_entity(ch: char) -> bool {
    matches!(u32::from(ch), 0xA0..=0xFF | 0x1_0000..=0x10_FFFF)
}
