//! Rule-driven lexer.
//!
//! The engine is a classic position-driven scanner: at the cursor it tries an
//! ordered list of anchored regular expressions, the first one that matches at
//! the cursor wins, a token is produced for the match and the cursor moves past
//! it.
//!
//! ```text
//! input:  ":duration • trim(:title)"
//!          ^ cursor
//!
//! rules (by priority):  placeholder > function call > literal
//!
//! ":duration"     -> placeholder token
//! " ", "•", " "   -> literal tokens
//! "trim(:title)"  -> function-call token
//! ```
//!
//! ## Responsibilities by module
//!
//! - `lexer.rs`: the scan loop ([`Lexer`]).
//! - `error.rs`: [`LexError`], raised only when no rule matches at the cursor.
//!
//! What a match *means* is not decided here. The caller hands [`Lexer::scan`] a
//! production closure that turns `(rule, captures, range)` into a token; the
//! template compiler (`template.rs`) is the only caller today.
//!
//! ## Invariants
//!
//! - The cursor strictly increases, so a scan always terminates.
//! - With a catch-all literal rule in the set, [`LexError`] cannot occur.
//!
//! ## Debugging
//!
//! Every match is logged at `trace` level under the `prtime::engine` target.

#[path = "engine/error.rs"]
mod error;
#[path = "engine/lexer.rs"]
mod lexer;

pub use error::LexError;
pub(crate) use lexer::Lexer;
