//! Character entity table
//!
//! Only five named entities are recognized (`lt`, `gt`, `amp`, `quot`,
//! `apos`). Numeric references decode straight from their code point.

/// Named entities and the characters they stand for.
pub const NAMED_ENTITIES: &[(&str, char)] = &[
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("quot", '"'),
    ("apos", '\''),
];

/// Resolve a named entity (without the `&` and `;`).
pub fn lookup(name: &str) -> Option<char> {
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, ch)| *ch)
}

/// Returns `true` if `name` is in the entity table.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Decode a numeric reference. Surrogates and values past `U+10FFFF` yield `None`.
pub fn decode_codepoint(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint)
}

/// Parse the digits of a numeric reference, e.g. `65` or `x41`.
pub fn parse_numeric(digits: &str) -> Option<u32> {
    let codepoint = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    decode_codepoint(codepoint).map(|_| codepoint)
}

/// Escape `text` so it parses back to itself as plain text.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            other => escaped.push(other),
        }
    }
    escaped
}
