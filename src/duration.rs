//! Durations: free-text parsing and pattern formatting.
//!
//! These are the two collaborators the title cleaner needs:
//!
//! ```text
//! "fix bug 1h30m"  -- parse -->  TimeDelta(90 min)  -- format("[h'h'm'm']") -->  "[1h30m]"
//! ```
//!
//! - `unit.rs`: calendar-free units ([`Unit`]) and the [`UnitSet`] bit set.
//! - `parse.rs`: sums every `<number><unit>` found in arbitrary text.
//! - `format.rs`: renders a duration through a token pattern where runs of
//!   `y M w d h m s S` are fields and `'quoted'` text is literal.
//!
//! Durations are `chrono::TimeDelta` with millisecond precision.

#[path = "duration/format.rs"]
mod format;
#[path = "duration/parse.rs"]
mod parse;
#[path = "duration/unit.rs"]
mod unit;

pub use format::format;
pub use parse::{parse, parse_millis};
pub use unit::{Unit, UnitSet};
