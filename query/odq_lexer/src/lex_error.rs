//! Lexical error type surfaced to the expression parser.
//!
//! Every failure carries WHERE (`position`, a character offset), WHAT
//! (`kind`), and the full input text, so the caller can render a
//! single-line caret diagnostic in the protocol-level error response.
//!
//! The lexer never recovers internally: an error aborts the current
//! `next_token` call at the point of detection with no partial token, and
//! the parse attempt for that query string is over.

use std::fmt::Write as _;

use thiserror::Error;

/// What kind of lexical error occurred.
///
/// Every variant means "this input is lexically invalid", never an
/// internal logic fault.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A quoted literal has no closing quote before end of input.
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    /// A backslash is not followed by one of the escapable characters
    /// (or by anything at all).
    #[error("invalid escape sequence")]
    InvalidEscapeSequence {
        /// The character found after the escape marker, if any.
        found: Option<char>,
    },
    /// A quoted phrase is empty after unescaping (`""`).
    #[error("empty quoted phrase where a search term was expected")]
    EmptyStringLiteral,
    /// A character outside the allowed set for its context.
    #[error("character '{ch}' is not valid")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A lexical error with everything needed for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at position {position} in '{source_text}'")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Zero-based character offset of the offending character or substring.
    pub position: u32,
    /// The complete input being lexed, for diagnostic construction.
    pub source_text: String,
}

impl LexError {
    /// A quoted literal ran into end of input before its closing quote.
    #[cold]
    #[must_use]
    pub fn unterminated_string_literal(position: u32, source: &str) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedStringLiteral,
            position,
            source_text: source.to_owned(),
        }
    }

    /// A backslash escape marker was followed by `found` instead of one of
    /// the escapable characters.
    #[cold]
    #[must_use]
    pub fn invalid_escape_sequence(position: u32, source: &str, found: Option<char>) -> Self {
        Self {
            kind: LexErrorKind::InvalidEscapeSequence { found },
            position,
            source_text: source.to_owned(),
        }
    }

    /// A quoted phrase unescaped to the empty string.
    #[cold]
    #[must_use]
    pub fn empty_string_literal(position: u32, source: &str) -> Self {
        Self {
            kind: LexErrorKind::EmptyStringLiteral,
            position,
            source_text: source.to_owned(),
        }
    }

    /// `ch` appeared where the grammar does not allow it.
    #[cold]
    #[must_use]
    pub fn invalid_character(position: u32, source: &str, ch: char) -> Self {
        Self {
            kind: LexErrorKind::InvalidCharacter { ch },
            position,
            source_text: source.to_owned(),
        }
    }

    /// Render a caret diagnostic quoting the invalid fragment:
    ///
    /// ```text
    /// foo#bar
    ///    ^
    /// character '#' is not valid
    /// ```
    ///
    /// The caret column is the character offset; alignment is exact for
    /// single-width characters.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source_text.len() * 2 + 32);
        out.push_str(&self.source_text);
        out.push('\n');
        for _ in 0..self.position {
            out.push(' ');
        }
        out.push_str("^\n");
        // infallible on String
        let _ = write!(out, "{}", self.kind);
        out
    }
}
