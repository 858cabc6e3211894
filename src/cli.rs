//! Command-line arguments.
//!
//! Inputs that a GitHub Actions step passes as `INPUT_*` variables can also be
//! given as flags; the flag wins.

use clap::{ArgAction, Args, Parser, Subcommand};
use prtime::action::{DEFAULT_DURATION_PATTERN, DEFAULT_TITLE_PATTERN};
use std::path::PathBuf;

/// Render and clean duration-stamped pull-request titles.
#[derive(Parser, Debug)]
#[command(name = "prtime")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level (`trace`, `debug`, `info`, `warn`, `error`), or
    /// `module=level` pairs separated by commas.
    #[arg(long, global = true, env = "PRTIME_LOG")]
    pub log_level: Option<String>,

    /// Force ANSI color output.
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable ANSI color output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a pattern.
    ///
    /// `:name` placeholders are replaced by `--var name=value`; calls such as
    /// `capitalize(:title)` are applied unless `--no-functions` is given.
    Render(RenderArgs),

    /// Strip the rendered duration from a title.
    Clean(CleanArgs),

    /// Parse the durations in a text and print their sum.
    Duration(DurationArgs),

    /// Print the GraphQL request that looks up the event's pull request.
    Query(EventArgs),

    /// Compute the new title from a lookup response and print the update
    /// request.
    Retitle(RetitleArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// The pattern to render.
    pub pattern: String,

    /// A `key=value` placeholder binding. Repeatable.
    #[arg(long = "var", short = 'v', value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub vars: Vec<String>,

    /// Treat `name(...)` as plain text.
    #[arg(long)]
    pub no_functions: bool,

    /// Print the token trace instead of just the output.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Duration pattern, e.g. `[h'h'm'm']`.
    #[arg(long, env = "INPUT_DURATIONPATTERN", default_value = DEFAULT_DURATION_PATTERN)]
    pub duration_pattern: String,

    /// Title pattern, e.g. `:duration • :title`.
    #[arg(long, env = "INPUT_TITLEPATTERN", default_value = DEFAULT_TITLE_PATTERN)]
    pub title_pattern: String,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// The current title.
    pub text: String,

    #[command(flatten)]
    pub patterns: PatternArgs,
}

#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Free text to scan.
    pub text: String,

    /// Also print the sum formatted with this duration pattern.
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Args, Debug)]
pub struct EventArgs {
    /// Event name.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: String,

    /// Path to the event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,
}

#[derive(Args, Debug)]
pub struct RetitleArgs {
    /// Lookup response document, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub response: String,

    /// Event name; unsupported events are skipped.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// `true` to also scan comments.
    #[arg(long, env = "INPUT_SCANCOMMENTS", default_value = "false")]
    pub scan_comments: String,

    /// `true` to also scan the pull-request body.
    #[arg(long, env = "INPUT_SCANPULLREQUESTBODY", default_value = "false")]
    pub scan_pull_request_body: String,
}
