/// Duration pattern used when none is configured.
pub const DEFAULT_DURATION_PATTERN: &str = "[h'h'm'm']";
/// Title pattern used when none is configured.
pub const DEFAULT_TITLE_PATTERN: &str = ":duration • :title";

/// Retitling configuration.
///
/// The CLI fills this from flags or from GitHub Actions style `INPUT_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub duration_pattern: String,
    pub title_pattern: String,
    /// Also scan issue comments for durations.
    pub scan_comments: bool,
    /// Also scan the pull-request body for durations.
    pub scan_pull_request_body: bool,
}

impl Default for Inputs {
    fn default() -> Self {
        Inputs {
            duration_pattern: DEFAULT_DURATION_PATTERN.to_string(),
            title_pattern: DEFAULT_TITLE_PATTERN.to_string(),
            scan_comments: false,
            scan_pull_request_body: false,
        }
    }
}

/// Boolean inputs are on only for the exact string `true`.
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}
