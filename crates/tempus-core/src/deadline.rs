//! Monotonic deadlines
//!
//! A [`Deadline`] is a nanosecond tick count on the monotonic clock, measured
//! from an arbitrary origin fixed for the lifetime of the process. Deadlines
//! are only meaningful against other deadlines from the same process run;
//! they are not portable across processes and not worth persisting.

use std::fmt;
use std::ops::{Add, Sub};

#[cfg(unix)]
use crate::clock::Clock;
use crate::timeout::Timeout;

/// A point on the monotonic clock, in nanoseconds since the process-local
/// origin
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Deadline(u64);

impl Deadline {
    /// Already expired: the monotonic origin itself
    pub const ALWAYS: Deadline = Deadline(0);

    /// Never expires
    pub const NEVER: Deadline = Deadline(u64::MAX);

    /// The current monotonic reading
    #[cfg(unix)]
    #[inline]
    pub fn now() -> Deadline {
        Deadline(Clock::MONOTONIC.now().as_nanos() as u64)
    }

    /// Construct from a raw tick count obtained earlier in this process run
    #[inline]
    pub const fn from_ticks(ticks: u64) -> Deadline {
        Deadline(ticks)
    }

    /// Raw nanosecond tick count
    #[inline]
    pub const fn ticks(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sub for Deadline {
    type Output = Timeout;

    /// Signed difference. Branches before subtracting so the unsigned
    /// magnitude never underflows; the smaller-minus-larger case is computed
    /// as a positive magnitude and negated.
    #[inline]
    fn sub(self, rhs: Deadline) -> Timeout {
        if self >= rhs {
            Timeout::nanoseconds((self.0 - rhs.0) as i64)
        } else {
            Timeout::nanoseconds(-((rhs.0 - self.0) as i64))
        }
    }
}

impl Add<Timeout> for Deadline {
    type Output = Deadline;

    fn add(self, rhs: Timeout) -> Deadline {
        if rhs == Timeout::ALWAYS {
            return Deadline::ALWAYS;
        }
        if rhs == Timeout::NEVER {
            return Deadline::NEVER;
        }
        if rhs.as_nanos() < 0 {
            Deadline(self.0 - rhs.as_nanos().unsigned_abs())
        } else {
            Deadline(self.0 + rhs.as_nanos().unsigned_abs())
        }
    }
}

impl Sub<Timeout> for Deadline {
    type Output = Deadline;

    fn sub(self, rhs: Timeout) -> Deadline {
        if rhs == Timeout::ALWAYS {
            return Deadline::NEVER;
        }
        if rhs == Timeout::NEVER {
            return Deadline::ALWAYS;
        }
        if rhs.as_nanos() < 0 {
            Deadline(self.0 + rhs.as_nanos().unsigned_abs())
        } else {
            Deadline(self.0 - rhs.as_nanos().unsigned_abs())
        }
    }
}
