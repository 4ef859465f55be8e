use crate::error::{ErrorKind, ParseError};
use crate::units::{Unit, UnitTable, DAY, HOUR, MINUTE, SECOND};
use crate::{Codec, ElapsedTime};

/// A signed time span that reads and writes itself as an XML Schema duration.
///
/// Uses the default unit table; see [`Codec`] for other year/month lengths.
///
/// ```
/// use xsd_duration::Duration;
///
/// let d = Duration::days(1).saturating_add(Duration::hours(2));
/// assert_eq!("P1DT2H", d.to_string());
///
/// let d: Duration = "-P60D".parse()?;
/// assert_eq!("-P2M", d.to_string());
/// assert!(d.is_negative());
/// #
/// # Ok::<(), xsd_duration::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(ElapsedTime);

#[allow(clippy::cast_possible_wrap)]
const fn scaled(n: i64, unit: u64) -> Duration {
    // every unit length fits into i64
    Duration(n.saturating_mul(unit as i64))
}

impl Duration {
    /// The zero-length duration, `PT0S`.
    pub const ZERO: Self = Self(0);

    /// N nominal years.
    #[must_use]
    pub const fn years(n: i64) -> Self {
        scaled(n, UnitTable::DEFAULT.length(Unit::Year))
    }

    /// N nominal months.
    #[must_use]
    pub const fn months(n: i64) -> Self {
        scaled(n, UnitTable::DEFAULT.length(Unit::Month))
    }

    /// N weeks, written out as days.
    #[must_use]
    pub const fn weeks(n: i64) -> Self {
        scaled(n, 7 * DAY)
    }

    /// N days.
    #[must_use]
    pub const fn days(n: i64) -> Self {
        scaled(n, DAY)
    }

    /// N hours.
    #[must_use]
    pub const fn hours(n: i64) -> Self {
        scaled(n, HOUR)
    }

    /// N minutes.
    #[must_use]
    pub const fn minutes(n: i64) -> Self {
        scaled(n, MINUTE)
    }

    /// N seconds.
    #[must_use]
    pub const fn seconds(n: i64) -> Self {
        scaled(n, SECOND)
    }

    /// N milliseconds.
    #[must_use]
    pub const fn millis(n: i64) -> Self {
        scaled(n, 1_000_000)
    }

    /// N microseconds.
    #[must_use]
    pub const fn micros(n: i64) -> Self {
        scaled(n, 1_000)
    }

    /// N nanoseconds.
    #[must_use]
    pub const fn nanos(n: i64) -> Self {
        Self(n)
    }

    /// Adds two durations, clamping at the numeric bounds.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Total length in nanoseconds.
    #[must_use]
    pub const fn as_nanos(&self) -> ElapsedTime {
        self.0
    }

    /// Returns `true` if the duration is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Magnitude as a [`std::time::Duration`].
    #[must_use]
    pub const fn unsigned_abs(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(self.0.unsigned_abs())
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Codec::new().encode(self.0))
    }
}

impl std::str::FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codec::new().decode(s).map(Self)
    }
}

impl From<ElapsedTime> for Duration {
    fn from(value: ElapsedTime) -> Self {
        Self(value)
    }
}

impl From<Duration> for ElapsedTime {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = ParseError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        ElapsedTime::try_from(value.as_nanos())
            .map(Self)
            .map_err(|_| ParseError::new(ErrorKind::NumericOverflow, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn display_scenarios() {
        let d = Duration::years(2)
            .saturating_add(Duration::months(6))
            .saturating_add(Duration::days(5))
            .saturating_add(Duration::hours(12))
            .saturating_add(Duration::minutes(35))
            .saturating_add(Duration::seconds(30));
        assert_eq!("P2Y6M5DT12H35M30S", d.to_string());

        assert_eq!("P1Y8M4D", Duration::months(20).to_string());
        assert_eq!("PT20M", Duration::minutes(20).to_string());
        assert_eq!("PT0S", Duration::ZERO.to_string());
        assert_eq!("-P2M", Duration::days(-60).to_string());
        assert_eq!("P2DT1H", Duration::hours(49).to_string());
        assert_eq!("P14D", Duration::weeks(2).to_string());
    }

    #[test]
    fn sub_second_units() {
        assert_eq!("PT0.25S", Duration::millis(250).to_string());
        assert_eq!("PT0.000007S", Duration::micros(7).to_string());
        assert_eq!("-PT0.000000003S", Duration::nanos(-3).to_string());
    }

    #[test]
    fn parse_and_compare() {
        let a: Duration = "P0Y20M0D".parse().unwrap();
        let b: Duration = "P20M".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(Duration::months(20), a);

        let d: Duration = "PT1M30.5S".parse().unwrap();
        assert_eq!(
            Duration::minutes(1)
                .saturating_add(Duration::seconds(30))
                .saturating_add(Duration::millis(500)),
            d
        );
    }

    #[test]
    fn saturates() {
        assert_eq!(i64::MAX, Duration::years(i64::MAX).as_nanos());
        assert_eq!(i64::MIN, Duration::days(i64::MIN).as_nanos());
    }

    #[test]
    fn std_conversions() {
        let d = Duration::try_from(std::time::Duration::from_millis(1_500)).unwrap();
        assert_eq!("PT1.5S", d.to_string());
        assert_eq!(std::time::Duration::from_millis(1_500), d.unsigned_abs());

        let d = Duration::seconds(-2);
        assert!(d.is_negative());
        assert_eq!(std::time::Duration::from_secs(2), d.unsigned_abs());

        let e = Duration::try_from(std::time::Duration::MAX).unwrap_err();
        assert_eq!(ErrorKind::NumericOverflow, e.kind());
    }
}
