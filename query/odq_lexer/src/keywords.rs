//! Keyword and character-class tables for the `$search` grammar.
//!
//! The three boolean operator keywords are matched ordinally and
//! case-sensitively: `and` or `And` are ordinary search terms, not
//! operators. The lookup is length-bucketed so non-keyword terms are
//! rejected with at most two comparisons.
//!
//! Both tables are process-wide and immutable; lexer instances share them
//! freely across threads.

/// Returns `true` if `text` is one of the reserved `$search` keywords
/// (`AND`, `OR`, `NOT`, exact case).
#[inline]
#[must_use]
pub fn is_search_keyword(text: &str) -> bool {
    match text.len() {
        2 => text == "OR",
        3 => text == "AND" || text == "NOT",
        _ => false,
    }
}

/// Returns `true` if `c` may appear in an unquoted search term.
///
/// The grammar admits the Unicode Letter categories (`Lu`, `Ll`, `Lt`,
/// `Lm`, `Lo`) and Number-letter (`Nl`). The standard library's
/// `char::is_alphabetic` tests the derived `Alphabetic` property, which
/// covers exactly those categories plus a small set of `Other_Alphabetic`
/// code points; decimal digits (`Nd`), punctuation, and symbols are all
/// rejected, so no regex engine is needed for this predicate.
#[inline]
pub(crate) fn is_search_term_char(c: char) -> bool {
    c.is_alphabetic()
}
