//! Duration value type.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use std::time::Duration as StdDuration;

use chrono::TimeDelta;

use crate::error::{OutOfRangeError, ParseError};
use crate::format::Canonical;
use crate::parse::parse_duration;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// A signed nanosecond interval that renders as a human-readable string
/// (e.g. `"5h12m47s"`) and parses it back.
///
/// The zero value renders as `""`. Both `""` and `"0"` parse to zero, so a
/// missing or `"0"` config value means "no duration set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(i64);

impl Duration {
    /// The zero duration.
    pub const ZERO: Duration = Duration(0);
    /// One nanosecond.
    pub const NANOSECOND: Duration = Duration(1);
    /// One microsecond.
    pub const MICROSECOND: Duration = Duration(NANOS_PER_MICRO);
    /// One millisecond.
    pub const MILLISECOND: Duration = Duration(NANOS_PER_MILLI);
    /// One second.
    pub const SECOND: Duration = Duration(NANOS_PER_SEC);
    /// One minute.
    pub const MINUTE: Duration = Duration(NANOS_PER_MIN);
    /// One hour.
    pub const HOUR: Duration = Duration(NANOS_PER_HOUR);
    /// The most negative representable duration.
    pub const MIN: Duration = Duration(i64::MIN);
    /// The largest representable duration.
    pub const MAX: Duration = Duration(i64::MAX);

    /// Wraps a signed nanosecond count. Any value is accepted.
    pub const fn new(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates a Duration from nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates a Duration from microseconds, saturating at the i64 bounds.
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(NANOS_PER_MICRO))
    }

    /// Creates a Duration from milliseconds, saturating at the i64 bounds.
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(NANOS_PER_MILLI))
    }

    /// Creates a Duration from seconds, saturating at the i64 bounds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(NANOS_PER_SEC))
    }

    /// Creates a Duration from minutes, saturating at the i64 bounds.
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.saturating_mul(NANOS_PER_MIN))
    }

    /// Creates a Duration from hours, saturating at the i64 bounds.
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(NANOS_PER_HOUR))
    }

    /// Parses a duration string.
    ///
    /// `""` and `"0"` yield zero; anything else goes through
    /// [`parse_duration`](crate::parse_duration).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() || s == "0" {
            return Ok(Self::ZERO);
        }
        parse_duration(s).map(Self)
    }

    /// Renders the duration; zero renders as the empty string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns the duration as nanoseconds.
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Returns the duration as whole microseconds, truncated toward zero.
    pub const fn as_micros(&self) -> i64 {
        self.0 / NANOS_PER_MICRO
    }

    /// Returns the duration as whole milliseconds, truncated toward zero.
    pub const fn as_millis(&self) -> i64 {
        self.0 / NANOS_PER_MILLI
    }

    /// Returns the duration as whole seconds, truncated toward zero.
    pub const fn as_secs(&self) -> i64 {
        self.0 / NANOS_PER_SEC
    }

    /// Returns the duration as seconds (floating point).
    pub fn as_secs_f64(&self) -> f64 {
        split_f64(self.0, NANOS_PER_SEC)
    }

    /// Returns the duration as minutes (floating point).
    pub fn as_mins_f64(&self) -> f64 {
        split_f64(self.0, NANOS_PER_MIN)
    }

    /// Returns the duration as hours (floating point).
    pub fn as_hours_f64(&self) -> f64 {
        split_f64(self.0, NANOS_PER_HOUR)
    }

    /// Returns true if this duration is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this duration is less than zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value. [`Duration::MIN`] maps to [`Duration::MAX`].
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Adds two durations, returning `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Subtracts `rhs`, returning `None` on overflow.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Rounds toward zero to a multiple of `m`. Returns `self` unchanged if
    /// `m <= 0`.
    pub const fn truncate(self, m: Self) -> Self {
        if m.0 <= 0 {
            return self;
        }
        Self(self.0 - self.0 % m.0)
    }

    /// Rounds to the nearest multiple of `m`, halfway values away from zero.
    /// Saturates at [`Duration::MIN`]/[`Duration::MAX`]. Returns `self`
    /// unchanged if `m <= 0`.
    pub const fn round(self, m: Self) -> Self {
        if m.0 <= 0 {
            return self;
        }
        let r = self.0 % m.0;
        if self.0 < 0 {
            let r = -r;
            if less_than_half(r, m.0) {
                return Self(self.0 + r);
            }
            return match self.0.checked_sub(m.0 - r) {
                Some(n) => Self(n),
                None => Self::MIN,
            };
        }
        if less_than_half(r, m.0) {
            return Self(self.0 - r);
        }
        match self.0.checked_add(m.0 - r) {
            Some(n) => Self(n),
            None => Self::MAX,
        }
    }
}

const fn less_than_half(x: i64, y: i64) -> bool {
    (x as u64) + (x as u64) < y as u64
}

fn split_f64(nanos: i64, unit: i64) -> f64 {
    let whole = nanos / unit;
    let rest = nanos % unit;
    whole as f64 + rest as f64 / unit as f64
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        fmt::Display::fmt(&Canonical(self.0), f)
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        self.0 -= rhs.0;
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration(-self.0)
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        Duration(self * rhs.0)
    }
}

impl Div<i64> for Duration {
    type Output = Duration;

    fn div(self, rhs: i64) -> Duration {
        Duration(self.0 / rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.copied().sum()
    }
}

impl From<i64> for Duration {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<Duration> for i64 {
    fn from(d: Duration) -> Self {
        d.0
    }
}

impl From<Duration> for TimeDelta {
    fn from(d: Duration) -> Self {
        TimeDelta::nanoseconds(d.0)
    }
}

impl TryFrom<TimeDelta> for Duration {
    type Error = OutOfRangeError;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        delta.num_nanoseconds().map(Self).ok_or(OutOfRangeError)
    }
}

impl TryFrom<StdDuration> for Duration {
    type Error = OutOfRangeError;

    fn try_from(d: StdDuration) -> Result<Self, Self::Error> {
        i64::try_from(d.as_nanos())
            .map(Self)
            .map_err(|_| OutOfRangeError)
    }
}

impl TryFrom<Duration> for StdDuration {
    type Error = OutOfRangeError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        u64::try_from(d.0)
            .map(StdDuration::from_nanos)
            .map_err(|_| OutOfRangeError)
    }
}
