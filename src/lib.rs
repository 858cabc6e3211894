//! Pattern compiler for pull-request titles.
//!
//! A title pattern such as `:duration • capitalize(:title)` is rendered by
//! scanning it with a small rule-driven lexer: `:name` placeholders are
//! substituted from a variable map, `fn(...)` calls apply one of a closed set
//! of string transforms, and everything else is copied through. The inverse,
//! [`clean_title`], takes a title that was rendered this way and strips the
//! duration scaffolding back out so the free text can be re-rendered later.
//!
//! ```
//! use prtime::{clean_title, render, vars};
//!
//! let title = render(":duration • :title", &vars([("duration", "[1h30m]"), ("title", "fix bug")]));
//! assert_eq!(title, "[1h30m] • fix bug");
//! assert_eq!(clean_title(&title, "[h'h'm'm']", ":duration • :title"), "fix bug");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod template;
mod title;

pub mod action;
pub mod duration;

pub use api::{RenderResult, TokenSummary, Variables, clean_title, render, render_verbose, render_with, vars};
pub use engine::LexError;
pub use error::{EXIT_INTERNAL, EXIT_SUCCESS, EXIT_USAGE, Error, Result};
pub use rules::functions::function_names;
pub use template::Functions;

// --- Internal types ---------------------------------------------------------

/// What produced a token's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A `:name` placeholder resolved from the variable map.
    Placeholder,
    /// The result of a `name(...)` call, registered or not.
    FunctionResult,
    /// A single character copied through unchanged.
    Literal,
}

/// One unit of lexer output. Only `value` survives rendering; `range` is kept
/// for traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, range: Range) -> Self {
        Token { kind, value: value.into(), range }
    }
}

/// Selects how the template compiler turns a match into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RuleKind {
    Placeholder,
    FunctionCall,
    Literal,
}

/// A lexer rule: a name, an anchored regular expression and a priority.
///
/// The handler is not stored on the rule; the caller of
/// [`engine::Lexer::scan`] dispatches on `kind`. Rule sets are fixed at compile
/// time (see `rules::template`).
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
    /// Must be anchored with `^`; the lexer only accepts matches at the cursor.
    pub pattern: &'static Regex,
    /// Higher is tried first.
    pub priority: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}
