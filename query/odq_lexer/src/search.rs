//! `$search` grammar lexer.
//!
//! Differs from the general expression grammar in exactly four ways:
//! strings are double-quoted phrases, escaping uses backslash (`\\` and
//! `\"` only), unquoted terms are either the keywords `AND` / `OR` / `NOT`
//! or generic search terms, and most non-letter characters are disallowed
//! inside an unquoted term.
//!
//! Bare terms and quoted phrases both denote search terms, so both end up
//! as `StringLiteral`; only the three keywords stay `Identifier`. The
//! reclassification happens after capture (a set-membership test on the
//! already-captured text) which keeps the scan single-pass.

use std::borrow::Cow;

use odq_token::{Token, TokenKind};

use crate::expr::ExpressionLexer;
use crate::keywords::{is_search_keyword, is_search_term_char};
use crate::lex_error::LexError;
use crate::unescape::unescape_phrase;

/// The quote character delimiting a search phrase.
const PHRASE_QUOTE: char = '"';
/// The escape marker inside a quoted phrase.
const ESCAPE_MARKER: char = '\\';

/// Lexer for the `$search` query option.
///
/// Positioned on its first token immediately after construction; same
/// `current_token` / `next_token` contract as [`ExpressionLexer`].
pub struct SearchLexer<'a> {
    inner: ExpressionLexer<'a>,
}

impl<'a> SearchLexer<'a> {
    /// Create a lexer positioned on the first token of `text`.
    ///
    /// Fails if the first token is already lexically invalid.
    pub fn new(text: &'a str) -> Result<Self, LexError> {
        Ok(Self {
            inner: ExpressionLexer::for_search(text)?,
        })
    }

    /// The token the lexer is positioned on. Idempotent, no side effect.
    pub fn current_token(&self) -> &Token<'a> {
        self.inner.current_token()
    }

    /// Advance past the current token and return the next one. Keeps
    /// returning `End` once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.inner.next_token()
    }

    /// The full input string.
    pub fn text(&self) -> &'a str {
        self.inner.text()
    }
}

/// Tokenize a whole `$search` expression, collecting every token through
/// `End`. Any lexical error aborts the parse of the string entirely.
pub fn tokenize_search(text: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = SearchLexer::new(text)?;
    let mut tokens = Vec::new();
    loop {
        let token = lexer.current_token().clone();
        let done = token.is_end();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
        lexer.next_token()?;
    }
}

impl<'a> ExpressionLexer<'a> {
    /// Scan one `$search` token. Dispatched from `next_token` when the
    /// engine was constructed for the search grammar.
    pub(crate) fn scan_search_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        let start_byte = self.cursor.byte_pos();
        let position = self.cursor.pos();

        match self.cursor.current() {
            None => Ok(Token::end(position)),
            Some('(') => Ok(self.single_char(TokenKind::OpenParen, start_byte, position)),
            Some(')') => Ok(self.single_char(TokenKind::CloseParen, start_byte, position)),
            Some(PHRASE_QUOTE) => self.scan_phrase(start_byte, position),
            Some(_) => self.scan_term(start_byte, position),
        }
    }

    /// Escape-aware scan of a quoted phrase.
    ///
    /// The closing quote terminates the phrase only when it was not
    /// preceded by an unconsumed escape marker; escaped pairs are consumed
    /// whole, so each character is visited once.
    fn scan_phrase(&mut self, start_byte: usize, position: u32) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_delim(b'"', b'\\') {
                None => {
                    return Err(LexError::unterminated_string_literal(
                        self.cursor.pos(),
                        self.text(),
                    ));
                }
                Some(ESCAPE_MARKER) => {
                    self.cursor.advance(); // escape marker
                    match self.cursor.current() {
                        Some('\\' | '"') => self.cursor.advance(),
                        found => {
                            return Err(LexError::invalid_escape_sequence(
                                self.cursor.pos(),
                                self.text(),
                                found,
                            ));
                        }
                    }
                }
                Some(_) => {
                    // The unescaped closing quote.
                    self.cursor.advance();
                    break;
                }
            }
        }

        let raw = self.cursor.slice_from(start_byte);
        let content = &raw[1..raw.len() - 1];
        let text: Cow<'a, str> = match unescape_phrase(content) {
            Some(owned) => Cow::Owned(owned),
            None => Cow::Borrowed(content),
        };
        if text.is_empty() {
            return Err(LexError::empty_string_literal(position, self.text()));
        }
        Ok(Token {
            kind: TokenKind::StringLiteral,
            text,
            position,
        })
    }

    /// Bare term: consume to whitespace, `)`, or end of input, then
    /// classify: keyword, valid search term, or invalid character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "in-token char offset is bounded by the token length which fits u32"
    )]
    fn scan_term(&mut self, start_byte: usize, position: u32) -> Result<Token<'a>, LexError> {
        self.cursor.eat_while(|c| !c.is_whitespace() && c != ')');
        let raw = self.cursor.slice_from(start_byte);

        if is_search_keyword(raw) {
            return Ok(Token::new(TokenKind::Identifier, raw, position));
        }

        for (offset, ch) in raw.chars().enumerate() {
            if !is_search_term_char(ch) {
                return Err(LexError::invalid_character(
                    position + offset as u32,
                    self.text(),
                    ch,
                ));
            }
        }

        // A validated bare term is semantically a string literal.
        Ok(Token::new(TokenKind::StringLiteral, raw, position))
    }
}
