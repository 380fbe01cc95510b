//! Character cursor over an immutable input string.
//!
//! The cursor reads one `char` at a time. End of input is the `None`
//! sentinel from [`Cursor::current`]; advancing at end of input is a
//! saturating no-op, so the position is monotonic and never wraps.
//!
//! # Positions
//!
//! Two offsets are tracked in lockstep: a character offset (token positions
//! and diagnostics are reported in characters) and a byte offset (substring
//! extraction). Both only ever move forward.

/// Character cursor with one character of lookahead.
///
/// The cursor is [`Copy`], enabling cheap state snapshots: a lexer can save
/// the cursor, probe ahead, and restore on a failed probe.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full input, immutable for the cursor's lifetime.
    text: &'a str,
    /// Byte offset of the current character.
    byte_pos: usize,
    /// Character offset of the current character.
    char_pos: u32,
    /// The character at `byte_pos`, or `None` at end of input.
    ch: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first character of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
            ch: text.chars().next(),
        }
    }

    /// The character at the current position, or `None` at end of input.
    /// Never fails.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.ch
    }

    /// The character one position ahead of current, or `None`.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        let ch = self.ch?;
        self.text[self.byte_pos + ch.len_utf8()..].chars().next()
    }

    /// Move forward by one character. A no-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(ch) = self.ch {
            self.byte_pos += ch.len_utf8();
            self.char_pos += 1;
            self.ch = self.text[self.byte_pos..].chars().next();
        }
    }

    /// Character offset of the current position.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.char_pos
    }

    /// Byte offset of the current position. Always on a char boundary.
    #[inline]
    #[must_use]
    pub fn byte_pos(&self) -> usize {
        self.byte_pos
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.ch.is_none()
    }

    /// The full input string.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of unread characters. O(remaining input); not for hot paths.
    #[must_use]
    pub fn remaining_chars(&self) -> usize {
        self.text[self.byte_pos..].chars().count()
    }

    /// Extract the substring between two byte offsets.
    ///
    /// Both offsets must lie on char boundaries, which holds whenever they
    /// came from [`byte_pos()`](Self::byte_pos).
    #[must_use]
    pub fn slice(&self, start_byte: usize, end_byte: usize) -> &'a str {
        &self.text[start_byte..end_byte]
    }

    /// Extract the substring from `start_byte` to the current position.
    #[must_use]
    pub fn slice_from(&self, start_byte: usize) -> &'a str {
        &self.text[start_byte..self.byte_pos]
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.ch {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Jump to the next occurrence of either ASCII delimiter byte using
    /// SIMD-accelerated search, keeping the character counter consistent.
    ///
    /// Returns the character found (one of the delimiters), or `None` if
    /// the input ended first, in which case the cursor is left at end of
    /// input. Both delimiters must be ASCII so a byte match is guaranteed
    /// to fall on a char boundary.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "skipped char count is bounded by char_pos arithmetic which fits u32"
    )]
    pub fn skip_to_delim(&mut self, a: u8, b: u8) -> Option<char> {
        debug_assert!(a.is_ascii() && b.is_ascii(), "delimiters must be ASCII");
        let rest = &self.text.as_bytes()[self.byte_pos..];
        match memchr::memchr2(a, b, rest) {
            Some(offset) => {
                let skipped = &self.text[self.byte_pos..self.byte_pos + offset];
                self.char_pos += skipped.chars().count() as u32;
                self.byte_pos += offset;
                self.ch = self.text[self.byte_pos..].chars().next();
                self.ch
            }
            None => {
                let skipped = &self.text[self.byte_pos..];
                self.char_pos += skipped.chars().count() as u32;
                self.byte_pos = self.text.len();
                self.ch = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
