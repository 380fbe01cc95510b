//! General expression lexer: the scanning engine shared by every OData
//! query expression grammar.
//!
//! [`ExpressionLexer`] produces the domain-agnostic tokens common to
//! `$filter`, `$orderby`, and the other expression-valued query options:
//! parentheses, commas, numeric literals, single-quoted string literals,
//! identifiers, operators, and end of input.
//!
//! The `$search` variant reuses this engine with a different token scan
//! (see [`SearchLexer`](crate::SearchLexer)); the variant is a tagged enum
//! fixed at construction, so dispatch is one match arm rather than a
//! virtual call on the request path.

use std::borrow::Cow;

use odq_lexer_core::Cursor;
use odq_token::{Token, TokenKind};

use crate::lex_error::LexError;
use crate::unescape::unescape_single_quoted;

/// Which grammar the engine scans. Fixed at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Grammar {
    /// The common expression grammar.
    Expression {
        /// Treat `;` as a token delimiter instead of an invalid character.
        semicolon_delimiter: bool,
    },
    /// The `$search` sub-grammar.
    Search,
}

/// Construction options for [`ExpressionLexer`].
#[derive(Clone, Copy, Debug)]
pub struct LexerOptions {
    /// Scan the first token during construction, so the lexer is
    /// positioned on a token immediately. Defaults to `true`; when `false`
    /// the lexer holds the `Unknown` placeholder until the caller's first
    /// `next_token`.
    pub scan_first: bool,
    /// Treat `;` as an additional token delimiter. This is a grammar
    /// variant switch affecting only the delimiter set; with it off, `;`
    /// is an invalid character.
    pub semicolon_delimiter: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            scan_first: true,
            semicolon_delimiter: false,
        }
    }
}

/// Lexer for the common OData expression grammar.
///
/// Owns its cursor exclusively; the input string is borrowed read-only for
/// the lexer's lifetime. One instance serves one input string; callers
/// lexing several query strings concurrently construct one lexer each.
pub struct ExpressionLexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    grammar: Grammar,
    token: Token<'a>,
}

impl<'a> ExpressionLexer<'a> {
    /// Create a lexer positioned on the first token of `text`.
    ///
    /// Equivalent to [`with_options`](Self::with_options) with defaults.
    /// Fails if the first token is already lexically invalid.
    pub fn new(text: &'a str) -> Result<Self, LexError> {
        Self::with_options(text, LexerOptions::default())
    }

    /// Create a lexer with explicit construction options.
    pub fn with_options(text: &'a str, options: LexerOptions) -> Result<Self, LexError> {
        let mut lexer = Self {
            cursor: Cursor::new(text),
            grammar: Grammar::Expression {
                semicolon_delimiter: options.semicolon_delimiter,
            },
            token: Token::start(),
        };
        if options.scan_first {
            lexer.next_token()?;
        }
        Ok(lexer)
    }

    /// Create the engine in `$search` mode, positioned on the first token.
    pub(crate) fn for_search(text: &'a str) -> Result<Self, LexError> {
        let mut lexer = Self {
            cursor: Cursor::new(text),
            grammar: Grammar::Search,
            token: Token::start(),
        };
        lexer.next_token()?;
        Ok(lexer)
    }

    /// The token the lexer is positioned on. Idempotent, no side effect.
    pub fn current_token(&self) -> &Token<'a> {
        &self.token
    }

    /// The full input string.
    pub fn text(&self) -> &'a str {
        self.cursor.text()
    }

    /// Advance past the current token: skip whitespace, scan exactly one
    /// token, store it as current, and return it.
    ///
    /// Once `End` has been produced, further calls keep returning `End`
    /// without advancing. On error no partial token is produced and the
    /// stored current token is left unchanged.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let token = match self.grammar {
            Grammar::Expression {
                semicolon_delimiter,
            } => self.scan_expression_token(semicolon_delimiter)?,
            Grammar::Search => self.scan_search_token()?,
        };
        self.token = token.clone();
        Ok(token)
    }

    // === Shared helpers ===

    /// Skip whitespace between tokens. Skipped spans never appear in any
    /// token's text.
    pub(crate) fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    /// Single-character token: consume one character and wrap it.
    pub(crate) fn single_char(
        &mut self,
        kind: TokenKind,
        start_byte: usize,
        position: u32,
    ) -> Token<'a> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start_byte), position)
    }

    // === Expression grammar ===

    fn scan_expression_token(
        &mut self,
        semicolon_delimiter: bool,
    ) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        let start_byte = self.cursor.byte_pos();
        let position = self.cursor.pos();

        let Some(ch) = self.cursor.current() else {
            return Ok(Token::end(position));
        };

        match ch {
            '(' => Ok(self.single_char(TokenKind::OpenParen, start_byte, position)),
            ')' => Ok(self.single_char(TokenKind::CloseParen, start_byte, position)),
            ',' => Ok(self.single_char(TokenKind::Comma, start_byte, position)),
            ':' => Ok(self.single_char(TokenKind::Colon, start_byte, position)),
            '=' => Ok(self.single_char(TokenKind::Equal, start_byte, position)),
            '/' => Ok(self.single_char(TokenKind::Slash, start_byte, position)),
            '?' => Ok(self.single_char(TokenKind::Question, start_byte, position)),
            '.' => Ok(self.single_char(TokenKind::Dot, start_byte, position)),
            '*' => Ok(self.single_char(TokenKind::Star, start_byte, position)),
            ';' if semicolon_delimiter => {
                Ok(self.single_char(TokenKind::Semicolon, start_byte, position))
            }
            '-' => {
                if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    // Sign belongs to the numeric literal.
                    self.cursor.advance();
                    Ok(self.scan_number(start_byte, position))
                } else {
                    Ok(self.single_char(TokenKind::Minus, start_byte, position))
                }
            }
            '\'' => self.scan_single_quoted(start_byte, position),
            c if c.is_ascii_digit() => Ok(self.scan_number(start_byte, position)),
            c if c == '_' || c.is_alphabetic() => {
                self.cursor.eat_while(|c| c == '_' || c.is_alphanumeric());
                Ok(Token::new(
                    TokenKind::Identifier,
                    self.cursor.slice_from(start_byte),
                    position,
                ))
            }
            c => Err(LexError::invalid_character(position, self.text(), c)),
        }
    }

    /// Numeric literal. The sign, if any, has already been consumed.
    ///
    /// A `.` or exponent marker not followed by a digit is left for the
    /// next token rather than consumed: `3.` lexes as the integer `3`
    /// followed by `Dot`.
    fn scan_number(&mut self, start_byte: usize, position: u32) -> Token<'a> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut kind = TokenKind::IntegerLiteral;
        if self.cursor.current() == Some('.')
            && self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            kind = TokenKind::DecimalLiteral;
        }
        if self.try_exponent() {
            kind = TokenKind::DecimalLiteral;
        }

        Token::new(kind, self.cursor.slice_from(start_byte), position)
    }

    /// Consume an `e`/`E` exponent (with optional sign) if and only if at
    /// least one digit follows; otherwise restore the cursor.
    fn try_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), Some('e' | 'E')) {
            return false;
        }
        let snapshot = self.cursor;
        self.cursor.advance();
        if matches!(self.cursor.current(), Some('+' | '-')) {
            self.cursor.advance();
        }
        if self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            true
        } else {
            self.cursor = snapshot;
            false
        }
    }

    /// OData single-quoted string literal; `''` inside the literal is an
    /// escaped quote. The empty literal `''` is valid in this grammar.
    fn scan_single_quoted(
        &mut self,
        start_byte: usize,
        position: u32,
    ) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::unterminated_string_literal(
                        self.cursor.pos(),
                        self.text(),
                    ));
                }
                Some('\'') => {
                    self.cursor.advance();
                    if self.cursor.current() == Some('\'') {
                        // Doubled quote: stay inside the literal.
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => self.cursor.advance(),
            }
        }

        let raw = self.cursor.slice_from(start_byte);
        let content = &raw[1..raw.len() - 1];
        let text: Cow<'a, str> = match unescape_single_quoted(content) {
            Some(owned) => Cow::Owned(owned),
            None => Cow::Borrowed(content),
        };
        Ok(Token {
            kind: TokenKind::StringLiteral,
            text,
            position,
        })
    }
}
