const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// A duration unit as used by format patterns.
///
/// Conversions are "casual": a month is 30 days and a year 365 days. No
/// calendar is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Unit; 8] =
        [Unit::Year, Unit::Month, Unit::Week, Unit::Day, Unit::Hour, Unit::Minute, Unit::Second, Unit::Millisecond];

    pub fn millis(self) -> i64 {
        match self {
            Unit::Year => 365 * DAY,
            Unit::Month => 30 * DAY,
            Unit::Week => 7 * DAY,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
            Unit::Millisecond => 1,
        }
    }

    /// The pattern letter for this unit (`y M w d h m s S`).
    pub fn token(self) -> char {
        match self {
            Unit::Year => 'y',
            Unit::Month => 'M',
            Unit::Week => 'w',
            Unit::Day => 'd',
            Unit::Hour => 'h',
            Unit::Minute => 'm',
            Unit::Second => 's',
            Unit::Millisecond => 'S',
        }
    }

    pub fn from_token(token: char) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.token() == token)
    }
}

bitflags::bitflags! {
    /// The set of units a format pattern asks for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UnitSet: u8 {
        const YEARS        = 1 << 0;
        const MONTHS       = 1 << 1;
        const WEEKS        = 1 << 2;
        const DAYS         = 1 << 3;
        const HOURS        = 1 << 4;
        const MINUTES      = 1 << 5;
        const SECONDS      = 1 << 6;
        const MILLISECONDS = 1 << 7;
    }
}

impl From<Unit> for UnitSet {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Year => UnitSet::YEARS,
            Unit::Month => UnitSet::MONTHS,
            Unit::Week => UnitSet::WEEKS,
            Unit::Day => UnitSet::DAYS,
            Unit::Hour => UnitSet::HOURS,
            Unit::Minute => UnitSet::MINUTES,
            Unit::Second => UnitSet::SECONDS,
            Unit::Millisecond => UnitSet::MILLISECONDS,
        }
    }
}

impl UnitSet {
    /// Units in the set, largest first.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |unit| self.contains(UnitSet::from(*unit)))
    }
}
