use crate::components::{Components, Seconds};
use crate::units::{Unit, UnitTable};
use crate::ElapsedTime;

/// Canonical form of a zero duration.
pub const ZERO: &str = "PT0S";

// "-P" + 6 * (u64::MAX digits + designator) + "T" + fraction
const MAX_LEN: usize = 2 + 6 * 21 + 1 + 10;

/// Renders an elapsed time as its shortest canonical duration string.
#[must_use]
pub fn encode(value: ElapsedTime, units: &UnitTable) -> String {
    if value == 0 {
        return ZERO.to_owned();
    }

    let components = Components::decompose(value, units);

    let mut str = String::with_capacity(MAX_LEN);
    write_components(&mut str, &components);
    str
}

/// Writes components as a duration string, leaving out zero items.
///
/// Components that are all zero produce [`ZERO`], never a bare `P`.
pub fn write_components(buf: &mut String, c: &Components) {
    if !c.has_date() && !c.has_time() {
        buf.push_str(ZERO);
        return;
    }

    if c.negative {
        buf.push('-');
    }
    buf.push('P');

    for unit in [Unit::Year, Unit::Month, Unit::Day] {
        write_item(buf, c.get(unit), unit);
    }

    if c.has_time() {
        buf.push('T');

        write_item(buf, c.hours, Unit::Hour);
        write_item(buf, c.minutes, Unit::Minute);

        if !c.seconds.is_zero() {
            write_seconds(buf, c.seconds);
        }
    }
}

fn write_item(buf: &mut String, n: u64, unit: Unit) {
    if n != 0 {
        buf.push_str(&n.to_string());
        buf.push(unit.designator());
    }
}

fn write_seconds(buf: &mut String, seconds: Seconds) {
    buf.push_str(&seconds.whole.to_string());

    if seconds.nanos != 0 {
        let mut frac = seconds.nanos;
        let mut width: usize = 9;

        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }

        buf.push('.');
        buf.push_str(&format!("{frac:0width$}"));
    }

    buf.push(Unit::Second.designator());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DAY, HOUR, MINUTE, MONTHISH, SECOND, YEARISH};
    use test_log::test;

    fn enc(value: u64) -> String {
        encode(i64::try_from(value).unwrap(), &UnitTable::DEFAULT)
    }

    #[test]
    fn encode_zero() {
        assert_eq!("PT0S", encode(0, &UnitTable::DEFAULT));
    }

    #[test]
    fn encode_full() {
        assert_eq!(
            "P2Y6M5DT12H35M30S",
            enc(2 * YEARISH + 6 * MONTHISH + 5 * DAY + 12 * HOUR + 35 * MINUTE + 30 * SECOND),
        );
    }

    #[test]
    fn encode_day_and_hours() {
        assert_eq!("P1DT2H", enc(DAY + 2 * HOUR));
    }

    #[test]
    fn encode_months_carry() {
        assert_eq!("P1Y8M4D", enc(20 * MONTHISH));
    }

    #[test]
    fn encode_minutes_only() {
        assert_eq!("PT20M", enc(20 * MINUTE));
    }

    #[test]
    fn encode_negative() {
        let value = -i64::try_from(60 * DAY).unwrap();
        assert_eq!("-P2M", encode(value, &UnitTable::DEFAULT));
    }

    #[test]
    fn encode_fraction_trimmed() {
        assert_eq!("PT1M30.5S", enc(MINUTE + 30 * SECOND + SECOND / 2));
        assert_eq!("PT0.000000001S", enc(1));
        assert_eq!("PT0.12S", enc(120_000_000));
        assert_eq!("PT1.123456789S", enc(1_123_456_789));
    }

    #[test]
    fn encode_extremes() {
        assert_eq!(
            "P299Y10M7DT23H47M16.854775807S",
            encode(i64::MAX, &UnitTable::DEFAULT)
        );
        assert_eq!(
            "-P299Y10M7DT23H47M16.854775808S",
            encode(i64::MIN, &UnitTable::DEFAULT)
        );
    }

    #[test]
    fn write_all_zero_components() {
        let mut buf = String::new();
        write_components(
            &mut buf,
            &Components {
                negative: true,
                ..Default::default()
            },
        );
        assert_eq!("PT0S", buf);
    }
}
