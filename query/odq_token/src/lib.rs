//! Token model shared by every OData query expression grammar.
//!
//! One uniform token record ([`Token`]) covers the general expression
//! grammar (`$filter`, `$orderby`, ...) and the `$search` sub-grammar, so
//! the downstream recursive-descent parser has a single contract.
//!
//! Also hosts [`RequestTargetKind`], the classification enumeration the
//! parser maps parsed expressions onto. It lives here as an interface
//! contract only; nothing in the lexing layer produces one.

mod request_target;
mod token;

pub use request_target::RequestTargetKind;
pub use token::{Token, TokenKind};
