//! Escape resolution for quoted literal bodies.
//!
//! Both resolvers return `None` when the content needs no processing, so
//! the caller can borrow the source slice directly instead of allocating.

/// Resolve `\\` and `\"` sequences in a `$search` phrase body.
///
/// `content` is the text between the quotes, already validated by the
/// scanner: every backslash is followed by `\` or `"`. Replacement is
/// left-to-right and non-overlapping, so `\\"` resolves to `\` followed by
/// a literal quote terminating nothing.
pub(crate) fn unescape_phrase(content: &str) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // Scanner validation guarantees an escapable character follows.
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    Some(result)
}

/// Collapse doubled quotes (`''`) in a single-quoted expression literal
/// body, the OData literal escaping style.
pub(crate) fn unescape_single_quoted(content: &str) -> Option<String> {
    if !content.contains("''") {
        return None;
    }
    Some(content.replace("''", "'"))
}
