//! Token kinds and the token record.

use std::borrow::Cow;
use std::fmt;

/// The closed set of token kinds the lexers produce.
///
/// The general expression grammar produces all of these; the `$search`
/// grammar produces only `OpenParen`, `CloseParen`, `StringLiteral`,
/// `Identifier`, and `End`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Placeholder kind for a lexer constructed without an immediate first
    /// scan. Never produced by `next_token`.
    Unknown,
    /// End of input. Zero-length; produced forever once input is exhausted.
    End,
    /// An identifier or keyword.
    Identifier,
    /// A string literal (quoted, or a bare `$search` term).
    StringLiteral,
    /// An integer literal, possibly signed.
    IntegerLiteral,
    /// A numeric literal with a fraction or exponent part.
    DecimalLiteral,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;` (only when the semicolon-delimiter option is enabled)
    Semicolon,
    /// `.`
    Dot,
    /// `=`
    Equal,
    /// `/`
    Slash,
    /// `?`
    Question,
    /// `*`
    Star,
    /// `-`
    Minus,
}

impl TokenKind {
    /// Returns `true` for literal kinds (string and numeric).
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::IntegerLiteral | TokenKind::DecimalLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Unknown => "unknown",
            TokenKind::End => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Equal => "'='",
            TokenKind::Slash => "'/'",
            TokenKind::Question => "'?'",
            TokenKind::Star => "'*'",
            TokenKind::Minus => "'-'",
        };
        f.write_str(name)
    }
}

/// One lexical unit.
///
/// `text` borrows from the input wherever possible; escape processing
/// (quote stripping, unescaping) produces an owned string instead. Tokens
/// other than string literals always carry the exact consumed substring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    /// What was scanned.
    pub kind: TokenKind,
    /// The consumed substring (post-processed for string literals).
    pub text: Cow<'a, str>,
    /// Zero-based offset, in characters, of the token's first character
    /// in the original input.
    pub position: u32,
}

impl<'a> Token<'a> {
    /// Create a token borrowing its text from the input.
    #[must_use]
    pub fn new(kind: TokenKind, text: &'a str, position: u32) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
            position,
        }
    }

    /// The placeholder a deferred-construction lexer holds before its first
    /// scan.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            kind: TokenKind::Unknown,
            text: Cow::Borrowed(""),
            position: 0,
        }
    }

    /// The end-of-input token at the given position.
    #[must_use]
    pub const fn end(position: u32) -> Self {
        Self {
            kind: TokenKind::End,
            text: Cow::Borrowed(""),
            position,
        }
    }

    /// Returns `true` if this is the end-of-input token.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "{} at {}", self.kind, self.position),
            _ => write!(f, "{} '{}' at {}", self.kind, self.text, self.position),
        }
    }
}
