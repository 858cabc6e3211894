use crate::template::{self, Functions};
use crate::{TokenKind, title};
use std::collections::HashMap;

/// Variable map used to resolve `:name` placeholders.
pub type Variables = HashMap<String, String>;

/// A compact view of one top-level token, used in verbose traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSummary {
    pub kind: TokenKind,
    /// Start byte index in the pattern.
    pub start: usize,
    /// End byte index in the pattern (exclusive).
    pub end: usize,
    /// The pattern text this token was produced from.
    pub source: String,
    /// What the token rendered to.
    pub value: String,
}

/// Result from [`render_verbose`].
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered pattern.
    pub pattern: String,
    /// The rendered text, identical to what [`render`] returns.
    pub output: String,
    /// Top-level tokens in scan order. Nested calls are folded into their
    /// enclosing function token.
    pub tokens: Vec<TokenSummary>,
}

/// Render `pattern` against `variables` with function calls enabled.
///
/// Never fails. Unknown placeholders render as `""`; unknown functions are
/// left in place with their arguments rendered.
///
/// # Example
/// ```
/// use prtime::{render, vars};
///
/// let variables = vars([("title", " fix bug ")]);
/// assert_eq!(render("capitalize(trim(:title))", &variables), "Fix bug");
/// assert_eq!(render("invalid(:title)", &variables), "invalid( fix bug )");
/// ```
pub fn render(pattern: &str, variables: &Variables) -> String {
    render_with(pattern, variables, Functions::Enabled)
}

/// Render `pattern`, choosing whether `name(...)` calls are recognized.
///
/// With [`Functions::Disabled`] calls are plain text and only placeholders are
/// substituted.
pub fn render_with(pattern: &str, variables: &Variables, functions: Functions) -> String {
    template::render(pattern, variables, functions)
}

/// Render `pattern` and also return the token trace.
///
/// This is meant for debugging patterns; the [`render`] path does not keep
/// the trace.
pub fn render_verbose(pattern: &str, variables: &Variables) -> RenderResult {
    let tokens = template::compile(pattern, variables, Functions::Enabled);

    RenderResult {
        pattern: pattern.to_string(),
        output: template::concatenate(&tokens),
        tokens: tokens
            .into_iter()
            .map(|token| TokenSummary {
                kind: token.kind,
                start: token.range.start,
                end: token.range.end,
                source: pattern.get(token.range.start..token.range.end).unwrap_or("").to_string(),
                value: token.value,
            })
            .collect(),
    }
}

/// Recover the free-text title from a title rendered with `title_pattern`.
///
/// The rendered duration is located by its shape under `duration_pattern`, and
/// `title_pattern` is turned into an extraction regex around it. When nothing
/// matches, `current` is returned unchanged.
///
/// # Example
/// ```
/// use prtime::clean_title;
///
/// assert_eq!(clean_title("Title • [12h30m]", "• [h'h'm'm']", ":title :duration"), "Title");
/// ```
pub fn clean_title(current: &str, duration_pattern: &str, title_pattern: &str) -> String {
    title::clean_title(current, duration_pattern, title_pattern)
}

/// Helper to build a [`Variables`] map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Variables
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}
