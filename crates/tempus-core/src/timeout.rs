//! Signed time intervals in nanoseconds

use std::ops::{Add, Mul, Sub};

/// A signed time interval in nanoseconds
///
/// The extreme values of the representation are reserved: [`Timeout::ALWAYS`]
/// (`i64::MIN`) and [`Timeout::NEVER`] (`i64::MAX`) act as absorbing
/// sentinels in the [`Time`](crate::time::Time) and
/// [`Deadline`](crate::deadline::Deadline) arithmetic. Picking the type's
/// min/max makes `ALWAYS` sort below and `NEVER` above every finite interval.
///
/// The unit factories scale by plain multiplication; guarding against
/// overflow for very large inputs is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timeout(i64);

impl Timeout {
    /// Sorts below every finite interval; absorbed to the distant-past end
    pub const ALWAYS: Timeout = Timeout(i64::MIN);

    /// Sorts above every finite interval; absorbed to the distant-future end
    pub const NEVER: Timeout = Timeout(i64::MAX);

    /// Interval of `amount` nanoseconds
    #[inline]
    pub const fn nanoseconds(amount: i64) -> Timeout {
        Timeout(amount)
    }

    /// Interval of `amount` microseconds
    #[inline]
    pub const fn microseconds(amount: i64) -> Timeout {
        Timeout(amount * 1_000)
    }

    /// Interval of `amount` milliseconds
    #[inline]
    pub const fn milliseconds(amount: i64) -> Timeout {
        Timeout(amount * 1_000_000)
    }

    /// Interval of `amount` seconds
    #[inline]
    pub const fn seconds(amount: i64) -> Timeout {
        Timeout(amount * 1_000_000_000)
    }

    /// Interval of `amount` minutes
    #[inline]
    pub const fn minutes(amount: i64) -> Timeout {
        Timeout(amount * 60_000_000_000)
    }

    /// Interval of `amount` hours
    #[inline]
    pub const fn hours(amount: i64) -> Timeout {
        Timeout(amount * 3_600_000_000_000)
    }

    /// Total nanoseconds
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}

// Plain signed arithmetic: sentinel handling belongs to the consuming
// Time/Deadline operations, not to the interval itself.

impl Add for Timeout {
    type Output = Timeout;

    #[inline]
    fn add(self, rhs: Timeout) -> Timeout {
        Timeout(self.0 + rhs.0)
    }
}

impl Sub for Timeout {
    type Output = Timeout;

    #[inline]
    fn sub(self, rhs: Timeout) -> Timeout {
        Timeout(self.0 - rhs.0)
    }
}

impl Mul<i64> for Timeout {
    type Output = Timeout;

    #[inline]
    fn mul(self, rhs: i64) -> Timeout {
        Timeout(self.0 * rhs)
    }
}

impl Mul<Timeout> for i64 {
    type Output = Timeout;

    #[inline]
    fn mul(self, rhs: Timeout) -> Timeout {
        Timeout(self * rhs.0)
    }
}
