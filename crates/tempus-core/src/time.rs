//! Absolute time as a seconds/nanoseconds pair
//!
//! A [`Time`] is either a wall-clock reading or a monotonic reading,
//! depending on which [`Clock`](crate::clock::Clock) produced it. The pair is
//! always normalized: the nanosecond component counts up to the next second.
//!
//! The textual form is `<seconds>.<nanoseconds zero-padded to 9 digits>`,
//! produced by `Display` and accepted by `FromStr`.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{TimeError, TimeResult};
use crate::timeout::Timeout;

/// Nanoseconds in one second
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A time value in whole seconds and nanoseconds until the next second
///
/// INVARIANT: `0 <= nanoseconds < 1_000_000_000` for every constructed value.
/// The derived ordering is lexicographic on `(seconds, nanoseconds)`, which
/// under that invariant is exactly chronological order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    seconds: i64,
    nanoseconds: i64,
}

impl Time {
    /// Conventional "beginning of time": the zero reading
    pub const DISTANT_PAST: Time = Time {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Furthest representable future
    pub const DISTANT_FUTURE: Time = Time {
        seconds: i64::MAX,
        nanoseconds: 0,
    };

    /// Create a time from whole seconds and sub-second nanoseconds.
    ///
    /// # Panics
    ///
    /// Panics if `nanoseconds` is not in `0..1_000_000_000`.
    #[inline]
    pub fn new(seconds: i64, nanoseconds: i64) -> Self {
        assert!(
            0 <= nanoseconds && nanoseconds < NANOS_PER_SEC,
            "nanoseconds component out of range: {nanoseconds}"
        );
        Time {
            seconds,
            nanoseconds,
        }
    }

    /// Checked variant of [`Time::new`] for callers that cannot guarantee
    /// the nanoseconds range up front.
    #[inline]
    pub fn from_components(seconds: i64, nanoseconds: i64) -> TimeResult<Self> {
        if nanoseconds < 0 || nanoseconds >= NANOS_PER_SEC {
            return Err(TimeError::InvalidNanoseconds(nanoseconds));
        }
        Ok(Time {
            seconds,
            nanoseconds,
        })
    }

    /// Whole seconds
    #[inline]
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Nanoseconds until the next second
    #[inline]
    pub fn subsec_nanoseconds(self) -> i64 {
        self.nanoseconds
    }

    /// Total milliseconds, saturating to `i64::MAX` on overflow
    #[inline]
    pub fn as_millis(self) -> i64 {
        match self.seconds.checked_mul(1_000) {
            Some(ms) => ms
                .checked_add(self.nanoseconds / 1_000_000)
                .unwrap_or(i64::MAX),
            None => i64::MAX,
        }
    }

    /// Total microseconds, saturating to `i64::MAX` on overflow
    #[inline]
    pub fn as_micros(self) -> i64 {
        match self.seconds.checked_mul(1_000_000) {
            Some(us) => us
                .checked_add(self.nanoseconds / 1_000)
                .unwrap_or(i64::MAX),
            None => i64::MAX,
        }
    }

    /// Total nanoseconds, saturating to `i64::MAX` on overflow
    #[inline]
    pub fn as_nanos(self) -> i64 {
        match self.seconds.checked_mul(NANOS_PER_SEC) {
            Some(ns) => ns.checked_add(self.nanoseconds).unwrap_or(i64::MAX),
            None => i64::MAX,
        }
    }
}

impl From<i64> for Time {
    #[inline]
    fn from(seconds: i64) -> Self {
        Time {
            seconds,
            nanoseconds: 0,
        }
    }
}

impl From<f64> for Time {
    /// Truncates toward zero for the seconds; the fraction keeps the input's
    /// sign and is scaled to nanosecond resolution. A negative fraction
    /// borrows one second so the nanoseconds invariant holds.
    fn from(value: f64) -> Self {
        let mut seconds = value.trunc() as i64;
        let mut nanoseconds = (value.fract() * 1_000_000_000.0) as i64;
        if nanoseconds < 0 {
            nanoseconds += NANOS_PER_SEC;
            seconds -= 1;
        }
        Time {
            seconds,
            nanoseconds,
        }
    }
}

impl FromStr for Time {
    type Err = TimeError;

    /// Parses `<seconds>.<fraction>` with at most 9 fractional digits.
    /// Parsing is integer-only: the fraction is right-padded to 9 digits,
    /// never routed through a float.
    fn from_str(s: &str) -> TimeResult<Self> {
        let Some((secs, frac)) = s.split_once('.') else {
            return Err(TimeError::MalformedLiteral);
        };
        if secs.is_empty() || frac.is_empty() || frac.contains('.') {
            return Err(TimeError::MalformedLiteral);
        }
        if frac.len() > 9 {
            return Err(TimeError::FractionTooLong { len: frac.len() });
        }
        let seconds = secs
            .parse::<i64>()
            .map_err(|_| TimeError::NonNumeric(secs.to_string()))?;
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::NonNumeric(frac.to_string()));
        }
        let digits = frac
            .parse::<i64>()
            .map_err(|_| TimeError::NonNumeric(frac.to_string()))?;
        let nanoseconds = digits * 10_i64.pow(9 - frac.len() as u32);
        Ok(Time {
            seconds,
            nanoseconds,
        })
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

impl Sub for Time {
    type Output = Timeout;

    /// Difference of the total-nanosecond views. Both views saturate at
    /// extreme magnitudes, a known precision limit of the 64-bit view.
    #[inline]
    fn sub(self, rhs: Time) -> Timeout {
        Timeout::nanoseconds(self.as_nanos() - rhs.as_nanos())
    }
}

impl Add<Timeout> for Time {
    type Output = Time;

    fn add(self, rhs: Timeout) -> Time {
        if rhs == Timeout::ALWAYS {
            return Time::DISTANT_PAST;
        }
        if rhs == Timeout::NEVER {
            return Time::DISTANT_FUTURE;
        }
        let carry_seconds = rhs.as_nanos() / NANOS_PER_SEC;
        let sub_nanos = rhs.as_nanos() % NANOS_PER_SEC;
        let total = self.nanoseconds + sub_nanos;
        let mut seconds = total / NANOS_PER_SEC;
        let mut nanoseconds = total % NANOS_PER_SEC;
        if nanoseconds < 0 {
            nanoseconds += NANOS_PER_SEC;
            seconds -= 1;
        }
        Time {
            seconds: self.seconds + seconds + carry_seconds,
            nanoseconds,
        }
    }
}

impl Sub<Timeout> for Time {
    type Output = Time;

    fn sub(self, rhs: Timeout) -> Time {
        if rhs == Timeout::ALWAYS {
            return Time::DISTANT_FUTURE;
        }
        if rhs == Timeout::NEVER {
            return Time::DISTANT_PAST;
        }
        let carry_seconds = rhs.as_nanos() / NANOS_PER_SEC;
        let sub_nanos = rhs.as_nanos() % NANOS_PER_SEC;
        let total = self.nanoseconds - sub_nanos;
        let mut seconds = total / NANOS_PER_SEC;
        let mut nanoseconds = total % NANOS_PER_SEC;
        if nanoseconds < 0 {
            nanoseconds += NANOS_PER_SEC;
            seconds -= 1;
        }
        Time {
            seconds: self.seconds + seconds - carry_seconds,
            nanoseconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(Time::from(10), Time::new(10, 0));
        assert_eq!(Time::from(5), Time::new(5, 0));
        assert_eq!(Time::from(10).as_nanos(), 10_000_000_000);
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Time::from(10.0), Time::new(10, 0));
        assert_eq!(Time::from(5.5), Time::new(5, 500_000_000));
        assert_eq!(Time::from(5.5).subsec_nanoseconds(), 500_000_000);
    }

    #[test]
    fn test_float_conversion_negative_borrows() {
        // -1.25 is -2 seconds plus 0.75 of a second
        let t = Time::from(-1.25);
        assert_eq!(t.seconds(), -2);
        assert_eq!(t.subsec_nanoseconds(), 750_000_000);
    }

    #[test]
    fn test_string_conversion() {
        assert!("0.123456789123".parse::<Time>().is_err());
        assert_eq!("0.1".parse::<Time>().unwrap().to_string(), "0.100000000");
        assert_eq!(Time::from(1_000_000).to_string(), "1000000.000000000");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("10".parse::<Time>().is_err());
        assert!("1.2.3".parse::<Time>().is_err());
        assert!("a.5".parse::<Time>().is_err());
        assert!("1.".parse::<Time>().is_err());
        assert!(".5".parse::<Time>().is_err());
        assert!("1.-5".parse::<Time>().is_err());
        assert!(matches!(
            "0.0123456789".parse::<Time>(),
            Err(TimeError::FractionTooLong { len: 10 })
        ));
    }

    #[test]
    fn test_parse_negative_seconds() {
        let t = "-3.5".parse::<Time>().unwrap();
        assert_eq!(t.seconds(), -3);
        assert_eq!(t.subsec_nanoseconds(), 500_000_000);
    }

    #[test]
    fn test_unit_views() {
        let time = Time::new(12, 3_456_789);
        assert_eq!(time.seconds(), 12);
        assert_eq!(time.subsec_nanoseconds(), 3_456_789);
        assert_eq!(time.as_millis(), 12_003);
        assert_eq!(time.as_micros(), 12_003_456);
        assert_eq!(time.as_nanos(), 12_003_456_789);
    }

    #[test]
    fn test_distant_past() {
        assert_eq!(Time::DISTANT_PAST.seconds(), 0);
        assert_eq!(Time::DISTANT_PAST.subsec_nanoseconds(), 0);
        assert_eq!(Time::DISTANT_PAST.as_millis(), 0);
        assert_eq!(Time::DISTANT_PAST.as_micros(), 0);
        assert_eq!(Time::DISTANT_PAST.as_nanos(), 0);
    }

    #[test]
    fn test_distant_future_views_saturate() {
        assert_eq!(Time::DISTANT_FUTURE.seconds(), i64::MAX);
        assert_eq!(Time::DISTANT_FUTURE.subsec_nanoseconds(), 0);
        assert_eq!(Time::DISTANT_FUTURE.as_millis(), i64::MAX);
        assert_eq!(Time::DISTANT_FUTURE.as_micros(), i64::MAX);
        assert_eq!(Time::DISTANT_FUTURE.as_nanos(), i64::MAX);
    }

    #[test]
    fn test_from_components_rejects_out_of_range() {
        assert_eq!(
            Time::from_components(0, -1),
            Err(TimeError::InvalidNanoseconds(-1))
        );
        assert_eq!(
            Time::from_components(0, NANOS_PER_SEC),
            Err(TimeError::InvalidNanoseconds(NANOS_PER_SEC))
        );
        assert_eq!(
            Time::from_components(7, NANOS_PER_SEC - 1),
            Ok(Time::new(7, NANOS_PER_SEC - 1))
        );
    }

    #[test]
    #[should_panic(expected = "nanoseconds component out of range")]
    fn test_new_panics_out_of_range() {
        let _ = Time::new(0, NANOS_PER_SEC);
    }

    #[test]
    fn test_ordering() {
        assert!(Time::new(1, 999_999_999) < Time::new(2, 0));
        assert!(Time::new(2, 1) > Time::new(2, 0));
        assert!(Time::DISTANT_PAST < Time::DISTANT_FUTURE);
    }

    #[test]
    fn test_time_difference() {
        let a = Time::new(10, 500_000_000);
        let b = Time::new(9, 750_000_000);
        assert_eq!((a - b).as_nanos(), 750_000_000);
        assert_eq!((b - a).as_nanos(), -750_000_000);
    }

    #[test]
    fn test_timeout_arithmetic() {
        let base = Time::new(10, 5);
        assert_eq!((base + Timeout::nanoseconds(10)).as_nanos(), 10_000_000_015);
        assert_eq!((base - Timeout::nanoseconds(10)).as_nanos(), 9_999_999_995);
        assert_eq!(
            (base + Timeout::nanoseconds(1_999_999_999)).as_nanos(),
            12_000_000_004
        );
        assert_eq!(
            (base - Timeout::nanoseconds(1_999_999_999)).as_nanos(),
            8_000_000_006
        );

        // Negated timeouts swap the direction
        assert_eq!((base - Timeout::nanoseconds(-10)).as_nanos(), 10_000_000_015);
        assert_eq!((base + Timeout::nanoseconds(-10)).as_nanos(), 9_999_999_995);
        assert_eq!(
            (base - Timeout::nanoseconds(-1_999_999_999)).as_nanos(),
            12_000_000_004
        );
        assert_eq!(
            (base + Timeout::nanoseconds(-1_999_999_999)).as_nanos(),
            8_000_000_006
        );
    }

    #[test]
    fn test_sentinel_absorption() {
        let t = Time::new(42, 7);
        assert_eq!(t + Timeout::ALWAYS, Time::DISTANT_PAST);
        assert_eq!(t + Timeout::NEVER, Time::DISTANT_FUTURE);
        assert_eq!(t - Timeout::ALWAYS, Time::DISTANT_FUTURE);
        assert_eq!(t - Timeout::NEVER, Time::DISTANT_PAST);
    }
}
