//! Free-text duration parser.
//!
//! Finds every `<number><unit>` pair in a text and sums them. Numbers may be
//! negative, fractional or use an exponent; digit separators (`1,000` or
//! `1_000`) are dropped first. Whitespace between number and unit is allowed.
//! Numbers without a recognized unit are ignored, so `fix #42` contributes
//! nothing.
//!
//! ```text
//! "worked 1h30m, then 15 mins"   ->  1h + 30m + 15m = 105 minutes
//! "Duration: 0h0m"               ->  zero (still Some)
//! "fix typo"                     ->  None
//! ```

use chrono::TimeDelta;
use log::trace;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;

/// Parse every duration mentioned in `text` and return their sum.
///
/// Returns `None` when the text mentions no duration at all.
///
/// ```
/// use chrono::TimeDelta;
///
/// assert_eq!(prtime::duration::parse("took 1h30m"), Some(TimeDelta::minutes(90)));
/// assert_eq!(prtime::duration::parse("no numbers here"), None);
/// ```
pub fn parse(text: &str) -> Option<TimeDelta> {
    let text = regex!(r"([0-9])[,_]([0-9])").replace_all(text, "${1}${2}");
    let mut total: Option<f64> = None;

    for caps in regex!(r"(?i)(-?(?:[0-9]+\.?[0-9]*|[0-9]*\.?[0-9]+)(?:e[-+]?[0-9]+)?)\s*(\p{L}*)").captures_iter(&text) {
        let Some(ratio) = unit_ratio(&caps[2]) else {
            continue;
        };
        let Ok(amount) = caps[1].parse::<f64>() else {
            continue;
        };
        trace!("duration term {:?} = {} ms", &caps[0], amount * ratio);
        *total.get_or_insert(0.0) += amount * ratio;
    }

    total.and_then(|millis| TimeDelta::try_milliseconds(millis.round() as i64))
}

/// [`parse`] in whole milliseconds.
pub fn parse_millis(text: &str) -> Option<i64> {
    parse(text).map(|delta| delta.num_milliseconds())
}

/// Milliseconds per unit. Tries the lowercased name, then the name with one
/// trailing `s` removed (`hours` -> `hour`, `mins` -> `min`).
fn unit_ratio(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    ratio(&lower).or_else(|| lower.strip_suffix('s').and_then(ratio))
}

fn ratio(unit: &str) -> Option<f64> {
    let millis = match unit {
        "ns" | "nanosecond" => 1e-6,
        "us" | "µs" | "μs" | "microsecond" => 1e-3,
        "ms" | "millisecond" | "msec" => 1.0,
        "s" | "sec" | "second" => SECOND,
        "m" | "min" | "minute" => MINUTE,
        "h" | "hr" | "hour" => HOUR,
        "d" | "day" => DAY,
        "w" | "wk" | "week" => 7.0 * DAY,
        "b" | "month" => YEAR / 12.0,
        "y" | "yr" | "year" => YEAR,
        _ => return None,
    };
    Some(millis)
}
