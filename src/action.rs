//! Pull-request retitling.
//!
//! This is the glue around the pattern compiler: it decides which pull request
//! an event refers to, sums the durations mentioned in its commits (and,
//! optionally, its comments and body), and computes the new title.
//!
//! ```text
//! event (name + payload) ── graphql::lookup_request ──> [network, not here]
//!                                                           │
//! response document ── graphql::parse_response ─────────────┘
//!        │
//!        v
//! retitle(pull_request, inputs)
//!   total = Σ duration::parse(message)
//!   title = render(title_pattern, { duration: format(total), title: clean_title(current) })
//!        │
//!        v
//! graphql::update_title_request ──> [network, not here]
//! ```
//!
//! Nothing in this module performs I/O beyond reading the event payload file.

#[path = "action/event.rs"]
mod event;
#[path = "action/graphql.rs"]
pub mod graphql;
#[path = "action/inputs.rs"]
mod inputs;

#[cfg(test)]
#[path = "action/tests.rs"]
mod tests;

pub use event::{Event, EventKind, Payload, Repository};
pub use inputs::{DEFAULT_DURATION_PATTERN, DEFAULT_TITLE_PATTERN, Inputs, parse_flag};

use crate::{clean_title, duration, render, vars};
use chrono::TimeDelta;
use graphql::PullRequest;
use log::info;

/// The outcome of [`retitle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retitle {
    pub pull_request_id: String,
    pub previous_title: String,
    pub title: String,
    /// Sum of every duration found in the scanned messages.
    pub total: TimeDelta,
}

impl Retitle {
    /// Whether the new title differs from the current one.
    pub fn is_changed(&self) -> bool {
        self.title != self.previous_title
    }

    pub fn request(&self) -> graphql::Request {
        graphql::update_title_request(&self.pull_request_id, &self.title)
    }
}

/// Texts to scan for durations: every commit message, then comment bodies and
/// the pull-request body when enabled.
pub fn messages<'a>(pull_request: &'a PullRequest, inputs: &Inputs) -> Vec<&'a str> {
    let mut messages: Vec<&str> =
        pull_request.commits.nodes.iter().flatten().map(|node| node.commit.message.as_str()).collect();

    if inputs.scan_comments {
        messages.extend(pull_request.comments.nodes.iter().flatten().map(|comment| comment.body_text.as_str()));
    }
    if inputs.scan_pull_request_body {
        messages.push(pull_request.body_text.as_str());
    }
    messages
}

/// Sum the durations in `messages`; a message without one counts as zero.
pub fn total_duration<'a>(messages: impl IntoIterator<Item = &'a str>) -> TimeDelta {
    messages
        .into_iter()
        .filter_map(duration::parse)
        .fold(TimeDelta::zero(), |total, delta| total.checked_add(&delta).unwrap_or(TimeDelta::MAX))
}

/// Compute the new title for `pull_request`.
pub fn retitle(pull_request: &PullRequest, inputs: &Inputs) -> Retitle {
    let messages = messages(pull_request, inputs);
    let total = total_duration(messages.iter().copied());
    let rendered_duration = duration::format(total, &inputs.duration_pattern);
    let title = clean_title(&pull_request.title, &inputs.duration_pattern, &inputs.title_pattern);

    info!(
        "pull request {}: {} ms over {} messages, title {:?}",
        pull_request.id,
        total.num_milliseconds(),
        messages.len(),
        title
    );

    Retitle {
        pull_request_id: pull_request.id.clone(),
        previous_title: pull_request.title.clone(),
        title: render(&inputs.title_pattern, &vars([("duration", rendered_duration), ("title", title)])),
        total,
    }
}
