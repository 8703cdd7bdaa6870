//! Canonical duration rendering.

use std::fmt;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Renders a signed nanosecond count in canonical form, e.g. `"72h3m0.5s"`.
///
/// Values under one second use a single `ns`, `µs` or `ms` segment (`"1.5µs"`).
/// Longer values use hours, minutes and fractional seconds; leading zero units
/// are omitted and trailing fractional zeros are dropped. Zero is `"0s"`.
pub fn format_duration(nanos: i64) -> String {
    Canonical(nanos).to_string()
}

/// Display adapter for [`format_duration`].
pub(crate) struct Canonical(pub(crate) i64);

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let u = self.0.unsigned_abs();

        if u < NANOS_PER_SEC {
            let (precision, unit) = if u < NANOS_PER_MICRO {
                (0, "ns")
            } else if u < NANOS_PER_MILLI {
                (3, "\u{00b5}s")
            } else {
                (6, "ms")
            };
            write_decimal(f, u, precision)?;
            return f.write_str(unit);
        }

        let secs = u / NANOS_PER_SEC;
        let hours = secs / 3600;
        let mins = secs / 60 % 60;
        if hours > 0 {
            write!(f, "{hours}h{mins}m")?;
        } else if mins > 0 {
            write!(f, "{mins}m")?;
        }
        write!(f, "{}", secs % 60)?;
        write_fraction(f, u % NANOS_PER_SEC, 9)?;
        f.write_str("s")
    }
}

/// Writes `value / 10^precision` as a decimal without trailing zeros.
fn write_decimal(f: &mut fmt::Formatter<'_>, value: u64, precision: u32) -> fmt::Result {
    let scale = 10u64.pow(precision);
    write!(f, "{}", value / scale)?;
    write_fraction(f, value % scale, precision)
}

fn write_fraction(f: &mut fmt::Formatter<'_>, frac: u64, precision: u32) -> fmt::Result {
    if frac == 0 {
        return Ok(());
    }
    let digits = format!("{:0width$}", frac, width = precision as usize);
    write!(f, ".{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        let cases: &[(i64, &str)] = &[
            (0, "0s"),
            (1, "1ns"),
            (1_100, "1.1µs"),
            (2_200_000, "2.2ms"),
            (3_300_000_000, "3.3s"),
            (4 * 60 * NANOS_PER_SEC as i64 + 5_000_000_000, "4m5s"),
            (4 * 60 * NANOS_PER_SEC as i64 + 5_001_000_000, "4m5.001s"),
            (
                5 * 3600 * NANOS_PER_SEC as i64 + 6 * 60 * NANOS_PER_SEC as i64 + 7_001_000_000,
                "5h6m7.001s",
            ),
            (8 * 60 * NANOS_PER_SEC as i64 + 1, "8m0.000000001s"),
            (i64::MAX, "2562047h47m16.854775807s"),
            (i64::MIN, "-2562047h47m16.854775808s"),
        ];
        for (nanos, want) in cases {
            assert_eq!(format_duration(*nanos), *want, "nanos = {nanos}");
        }
    }

    #[test]
    fn test_format_sub_second_boundaries() {
        assert_eq!(format_duration(999), "999ns");
        assert_eq!(format_duration(1_000), "1µs");
        assert_eq!(format_duration(999_999), "999.999µs");
        assert_eq!(format_duration(1_000_000), "1ms");
        assert_eq!(format_duration(999_999_999), "999.999999ms");
        assert_eq!(format_duration(1_000_000_000), "1s");
        assert_eq!(format_duration(-1_500), "-1.5µs");
    }

    #[test]
    fn test_format_hours_keep_minutes() {
        assert_eq!(format_duration(3600 * NANOS_PER_SEC as i64), "1h0m0s");
        assert_eq!(format_duration(60 * NANOS_PER_SEC as i64), "1m0s");
    }
}
