use crate::units::{Unit, UnitTable};
use crate::ElapsedTime;

/// Seconds split into a whole part and a nanosecond fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Seconds {
    /// Whole seconds.
    pub whole: u64,

    /// Fraction of a second, always below one billion.
    pub nanos: u32,
}

impl Seconds {
    /// Returns `true` if both parts are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.nanos == 0
    }
}

/// The six components of a duration plus its sign.
///
/// The formatter only ever produces canonical (greedily decomposed)
/// components; the parser keeps whatever magnitudes the text spelled out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// `true` for a leading `-`.
    pub negative: bool,

    /// `nY`
    pub years: u64,

    /// `nM` in the date part
    pub months: u64,

    /// `nD`
    pub days: u64,

    /// `nH`
    pub hours: u64,

    /// `nM` in the time part
    pub minutes: u64,

    /// `n[.f]S`
    pub seconds: Seconds,
}

impl Components {
    /// Splits an elapsed time into canonical components, largest unit first.
    #[must_use]
    pub fn decompose(value: ElapsedTime, units: &UnitTable) -> Self {
        let mut rest = value.unsigned_abs();

        let mut take = |unit: Unit| {
            let length = units.length(unit);
            let n = rest / length;
            rest %= length;
            n
        };

        let years = take(Unit::Year);
        let months = take(Unit::Month);
        let days = take(Unit::Day);
        let hours = take(Unit::Hour);
        let minutes = take(Unit::Minute);
        let whole = take(Unit::Second);

        // what is left is below one second
        #[allow(clippy::cast_possible_truncation)]
        let nanos = rest as u32;

        Self {
            negative: value < 0,
            years,
            months,
            days,
            hours,
            minutes,
            seconds: Seconds { whole, nanos },
        }
    }

    /// Count stored for a unit, ignoring the seconds fraction.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds.whole,
        }
    }

    pub(crate) fn set(&mut self, unit: Unit, n: u64) {
        match unit {
            Unit::Year => self.years = n,
            Unit::Month => self.months = n,
            Unit::Day => self.days = n,
            Unit::Hour => self.hours = n,
            Unit::Minute => self.minutes = n,
            Unit::Second => self.seconds.whole = n,
        }
    }

    /// Returns `true` if any date component is set.
    #[must_use]
    pub const fn has_date(&self) -> bool {
        self.years != 0 || self.months != 0 || self.days != 0
    }

    /// Returns `true` if any time component is set.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || !self.seconds.is_zero()
    }

    /// Weighted sum of all components, or `None` if it does not fit an [`ElapsedTime`].
    #[must_use]
    pub fn total(&self, units: &UnitTable) -> Option<ElapsedTime> {
        let mut magnitude = u128::from(self.seconds.nanos);

        for unit in Unit::ALL {
            let part = u128::from(self.get(unit)).checked_mul(u128::from(units.length(unit)))?;
            magnitude = magnitude.checked_add(part)?;
        }

        let magnitude = i128::try_from(magnitude).ok()?;
        let signed = if self.negative { -magnitude } else { magnitude };

        ElapsedTime::try_from(signed).ok()
    }
}
