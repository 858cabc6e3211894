//! Pattern formatter.
//!
//! A pattern is split into runs of the same character. Runs whose letter is a
//! unit token (`y M w d h m s S`) are fields; the run length is the zero-padded
//! width. Text inside single quotes is literal, and so is any other run.
//!
//! ```text
//! "[h'h'm'm']"  ->  "[" h "h" m "m" "]"
//! ```
//!
//! The duration is first shifted into exactly the units the pattern uses, so
//! `d 'days' h 'hours'` never overflows hours into a field that is not there.

use super::unit::{Unit, UnitSet};
use chrono::TimeDelta;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field { unit: Unit, width: usize },
}

/// Render `delta` through `pattern`.
///
/// ```
/// use chrono::TimeDelta;
///
/// assert_eq!(prtime::duration::format(TimeDelta::minutes(90), "h'h'm'm'"), "1h30m");
/// assert_eq!(prtime::duration::format(TimeDelta::minutes(65), "hh:mm"), "01:05");
/// ```
pub fn format(delta: TimeDelta, pattern: &str) -> String {
    let segments = tokenize(pattern);
    let units = segments.iter().fold(UnitSet::empty(), |set, segment| match segment {
        Segment::Field { unit, .. } => set | UnitSet::from(*unit),
        Segment::Literal(_) => set,
    });
    let values = shift(delta.num_milliseconds(), units);

    let mut out = String::with_capacity(pattern.len());
    for segment in &segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Field { unit, width } => {
                let value = values.iter().find(|(u, _)| u == unit).map_or(0, |(_, v)| *v);
                out.push_str(&pad(value, *width));
            }
        }
    }
    out
}

fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run = String::new();
    let mut current: Option<char> = None;
    let mut quoted = false;

    for c in pattern.chars() {
        if c == '\'' {
            flush(&mut segments, &mut run, quoted);
            current = None;
            quoted = !quoted;
        } else if quoted || current == Some(c) {
            run.push(c);
        } else {
            flush(&mut segments, &mut run, false);
            run.push(c);
            current = Some(c);
        }
    }
    // An unterminated quote keeps the tail literal.
    flush(&mut segments, &mut run, quoted);
    segments
}

fn flush(segments: &mut Vec<Segment>, run: &mut String, quoted: bool) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    let unit = if quoted { None } else { text.chars().next().and_then(Unit::from_token) };
    segments.push(match unit {
        Some(unit) => Segment::Field { unit, width: text.chars().count() },
        None => Segment::Literal(text),
    });
}

/// Distribute `millis` over `units`, largest first; each unit takes the floor
/// of what is left and the remainder below the smallest unit is dropped.
fn shift(millis: i64, units: UnitSet) -> Vec<(Unit, i64)> {
    let sign = millis.signum();
    let mut remaining = millis.saturating_abs();

    units
        .units()
        .map(|unit| {
            let value = remaining / unit.millis();
            remaining -= value * unit.millis();
            (unit, value * sign)
        })
        .collect()
}

fn pad(value: i64, width: usize) -> String {
    if value < 0 { format!("-{:0width$}", value.unsigned_abs()) } else { format!("{value:0width$}") }
}
