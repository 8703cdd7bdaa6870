//! Duration grammar parser.
//!
//! Accepts an optional sign followed by one or more `<number><unit>` segments,
//! e.g. `"300ms"`, `"-1.5h"` or `"2h45m"`. Numbers may carry a fractional part.
//! Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`.

use crate::error::ParseError;

/// Magnitude of `i64::MIN`, the largest absolute value a segment sum may reach.
const LIMIT: u64 = 1 << 63;

/// Parses a duration string into a signed count of nanoseconds.
///
/// This is the bare grammar: `""` is rejected and only `"0"` (optionally
/// signed) is accepted without a unit. [`Duration::parse`](crate::Duration::parse)
/// adds the empty-string convention on top.
pub fn parse_duration(input: &str) -> Result<i64, ParseError> {
    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(ParseError::invalid(input));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(ParseError::invalid(input));
        }

        let (whole, rest) = leading_int(s).ok_or_else(|| ParseError::invalid(input))?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let mut frac = 0u64;
        let mut scale = 1.0f64;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, after) = leading_fraction(rest);
            has_frac = after.len() != rest.len();
            frac = f;
            scale = sc;
            s = after;
        }
        if !has_whole && !has_frac {
            return Err(ParseError::invalid(input));
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseError::MissingUnit {
                input: input.to_string(),
            });
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;

        let unit_nanos = unit_nanos(unit).ok_or_else(|| ParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        if whole > LIMIT / unit_nanos {
            return Err(ParseError::invalid(input));
        }
        let mut value = whole * unit_nanos;
        if frac > 0 {
            value = value.saturating_add((frac as f64 * (unit_nanos as f64 / scale)) as u64);
            if value > LIMIT {
                return Err(ParseError::invalid(input));
            }
        }

        total = match total.checked_add(value) {
            Some(t) if t <= LIMIT => t,
            _ => return Err(ParseError::invalid(input)),
        };
    }

    if negative {
        // total == LIMIT maps onto i64::MIN.
        return Ok(0i64.wrapping_sub_unsigned(total));
    }
    i64::try_from(total).map_err(|_| ParseError::invalid(input))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "\u{00b5}s" | "\u{03bc}s" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 60 * 60 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// Consumes leading ASCII digits. Returns `None` on overflow past [`LIMIT`].
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = digits_end(s);
    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consumes leading ASCII digits of a fractional part, returning the digits as
/// an integer and the power of ten they are scaled by. Digits past the
/// precision of `u64` are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = digits_end(s);
    let mut x: u64 = 0;
    let mut scale = 1.0f64;
    let mut overflow = false;
    for b in s[..end].bytes() {
        if overflow {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > LIMIT {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

fn digits_end(s: &str) -> usize {
    s.bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len())
}
