//! Unit lengths shared by encoding and decoding.
//!
//! Day, hour, minute and second are exact. Years and months are nominal
//! lengths that only exist so a duration can be written with `Y` and `M`.

/// Nanoseconds in a second.
pub const SECOND: u64 = 1_000_000_000;

/// Nanoseconds in a minute.
pub const MINUTE: u64 = 60 * SECOND;

/// Nanoseconds in an hour.
pub const HOUR: u64 = 60 * MINUTE;

/// Nanoseconds in a day (always 24 hours).
pub const DAY: u64 = 24 * HOUR;

/// Nominal length of a month: 30 days.
pub const MONTHISH: u64 = 30 * DAY;

/// Nominal length of a year: 356 days.
///
/// This is not a calendar year. It only has to be the same constant on
/// both the encoding and decoding side.
pub const YEARISH: u64 = 356 * DAY;

/// A duration component, in the order its designator must appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// `nY`
    Year,

    /// `nM` before `T`
    Month,

    /// `nD`
    Day,

    /// `nH`
    Hour,

    /// `nM` after `T`
    Minute,

    /// `nS`, the only component that may carry a fraction
    Second,
}

impl Unit {
    /// All units in designator order.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// The designator letter written after the number.
    #[must_use]
    pub const fn designator(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month | Self::Minute => 'M',
            Self::Day => 'D',
            Self::Hour => 'H',
            Self::Second => 'S',
        }
    }

    /// Returns `true` if the unit belongs after the `T` separator.
    #[must_use]
    pub const fn is_time(self) -> bool {
        matches!(self, Self::Hour | Self::Minute | Self::Second)
    }

    /// Resolves a designator letter, which is ambiguous for `M`.
    #[must_use]
    pub const fn from_designator(c: char, in_time: bool) -> Option<Self> {
        Some(match (c, in_time) {
            ('Y', _) => Self::Year,
            ('M', false) => Self::Month,
            ('M', true) => Self::Minute,
            ('D', _) => Self::Day,
            ('H', _) => Self::Hour,
            ('S', _) => Self::Second,
            _ => return None,
        })
    }
}

/// Lengths of every unit, in nanoseconds.
///
/// Encoding and decoding must share one table, otherwise
/// a decoded value will not survive being encoded again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitTable {
    pub(crate) year: u64,
    pub(crate) month: u64,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl UnitTable {
    /// Nominal 356 day years and 30 day months.
    pub const DEFAULT: Self = Self {
        year: YEARISH,
        month: MONTHISH,
    };

    /// Length of the given unit in nanoseconds.
    #[must_use]
    pub const fn length(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Year => self.year,
            Unit::Month => self.month,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
        }
    }

    pub(crate) const fn is_valid(&self) -> bool {
        DAY < self.month && self.month < self.year
    }
}
