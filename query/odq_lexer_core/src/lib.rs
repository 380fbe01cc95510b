//! Scanner primitives for the OData query expression lexers.
//!
//! [`Cursor`] provides character-at-a-time reading over an immutable input
//! string: position tracking, one character of lookahead, and a saturating
//! advance. It carries no parsing semantics of its own; every lexer
//! variant builds on it so the scanning invariants (monotonic position,
//! sentinel at end of input) hold uniformly.

mod cursor;

pub use cursor::Cursor;
