//! Lexers for OData query expressions.
//!
//! Turns the raw textual value of a query option (`$filter`, `$orderby`,
//! `$search`, ...) into a stream of typed, positioned tokens for the
//! recursive-descent parser layered above.
//!
//! Two grammar variants share one scanning engine, selected at construction
//! rather than by subclassing:
//!
//! - [`ExpressionLexer`] handles the common expression grammar: parentheses,
//!   numeric and single-quoted string literals, identifiers, operators.
//! - [`SearchLexer`] handles the `$search` sub-grammar: double-quoted phrases
//!   with backslash escapes, bare search terms, and the case-sensitive
//!   keywords `AND`, `OR`, `NOT`.
//!
//! Data flow: raw string → [`Cursor`](odq_lexer_core::Cursor) → lexer →
//! ordered [`Token`](odq_token::Token) sequence → (external) parser.
//!
//! A lexer is positioned on its first token as soon as it is constructed,
//! so callers always read `current_token` before calling `next_token`.
//! Lexical errors are terminal for the parse attempt: the failing
//! `next_token` call returns a [`LexError`] carrying the offending position
//! and the full input, and no partial token.

mod expr;
mod keywords;
mod lex_error;
mod search;
mod unescape;

pub use expr::{ExpressionLexer, LexerOptions};
pub use keywords::is_search_keyword;
pub use lex_error::{LexError, LexErrorKind};
pub use search::{tokenize_search, SearchLexer};
