//! Title cleaner: the inverse of rendering a title pattern.
//!
//! Given a title that was produced by rendering `title_pattern` with some
//! `:duration` and `:title`, recover the `:title` part. The rendered duration
//! is unknown, so its shape is learned from a probe:
//!
//! ```text
//! current          "[12h30m] • short title"
//! parse            45_000_000 ms
//! probe            format(45_000_000, "[h'h'm'm']")     = "[12h30m]"
//! duration shape   escape + digits -> [0-9]+            = \[[0-9]+h[0-9]+m\]
//! matched          first match in current              = "[12h30m]"
//! extraction       ":duration • :title" -> \[12h30m\] • (.*)
//! result           capture group 1                      = "short title"
//! ```
//!
//! The shape is a heuristic. If the duration pattern has literal digits next
//! to its fields, they are generalized too and the shape can match more than
//! a rendered duration.

use crate::duration;
use crate::rules::template::{function_shape, placeholder_shape};
use chrono::TimeDelta;
use log::{debug, warn};
use regex::{NoExpand, Regex};

/// Probe length used when `current` mentions no duration: one year, long
/// enough that every field of a typical pattern renders as a number.
pub(crate) const FALLBACK_PROBE_MILLIS: i64 = 31_540_000_000;

/// Stands in for the rendered duration when none can be found.
const FALLBACK_MATCH: &str = ".";

pub(crate) fn clean_title(current: &str, duration_pattern: &str, title_pattern: &str) -> String {
    let probe_delta = duration::parse(current).unwrap_or(TimeDelta::milliseconds(FALLBACK_PROBE_MILLIS));
    let probe = duration::format(probe_delta, duration_pattern);
    let shape = duration_shape(&probe);

    let matched = match Regex::new(&shape) {
        Ok(re) => re.find(current).map(|m| m.as_str()),
        Err(err) => {
            warn!("duration shape {shape:?} does not compile: {err}");
            None
        }
    }
    .unwrap_or(FALLBACK_MATCH);

    let extraction = extraction_pattern(title_pattern, matched);
    debug!("clean_title: probe={probe:?} shape={shape:?} matched={matched:?} extraction={extraction:?}");

    match Regex::new(&extraction) {
        Ok(re) => re.replace(current, "${1}").into_owned(),
        Err(err) => {
            warn!("extraction pattern {extraction:?} does not compile: {err}");
            current.to_string()
        }
    }
}

/// Escape `probe` and generalize its digits so it matches any duration with
/// the same literal skeleton. Only ASCII digits count; formatted durations
/// never contain any others.
pub(crate) fn duration_shape(probe: &str) -> String {
    let escaped = regex::escape(probe);
    let generalized = regex!(r"[0-9]").replace_all(&escaped, NoExpand("[0-9]+"));
    regex!(r"(\[0-9\]\+){2,}").replace_all(&generalized, NoExpand("[0-9]+")).into_owned()
}

/// Turn `title_pattern` into a regex whose first group captures the title.
///
/// Applied in order to the escaped pattern: a call wrapping `:title` becomes
/// `(.*)`; a call wrapping `:duration` becomes the matched duration; then the
/// bare placeholders the same way; anything still shaped like a call or a
/// placeholder becomes `.*`.
pub(crate) fn extraction_pattern(title_pattern: &str, matched_duration: &str) -> String {
    let duration = regex::escape(matched_duration);
    let pattern = regex::escape(title_pattern);

    let pattern = regex!(r"([a-zA-Z_]+)\\?\((:title)\\?\)").replace(&pattern, NoExpand("(.*)"));
    let pattern = regex!(r"([a-zA-Z_]+)\\?\((:duration)\\?\)").replace(&pattern, NoExpand(&duration));
    let pattern = regex!(r":title").replace(&pattern, NoExpand("(.*)"));
    let pattern = regex!(r":duration").replace(&pattern, NoExpand(&duration));
    let pattern = function_shape().replace_all(&pattern, NoExpand(".*"));
    let pattern = placeholder_shape().replace_all(&pattern, NoExpand(".*"));

    pattern.into_owned()
}
