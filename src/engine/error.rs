use thiserror::Error;

/// Raised when no rule matches at the scan cursor.
///
/// Rule sets used by the template compiler end with a catch-all literal rule,
/// so seeing this error means the rule set itself is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("no rule matched at byte {position} (near {snippet:?})")]
    NoRuleMatched { position: usize, snippet: String },
}
