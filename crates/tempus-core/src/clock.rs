//! Platform clock sources
//!
//! The four clock kinds map onto the native `clock_gettime` identifiers:
//! - [`Clock::REALTIME`] - time since the epoch
//! - [`Clock::MONOTONIC`] - time since an arbitrary fixed point
//! - [`Clock::PROCESS`] - CPU time the process has been running for
//! - [`Clock::THREAD`] - CPU time the calling thread has been running for
//!
//! This module is the only platform-specific part of the crate; everything
//! downstream consumes the [`Time`] it produces.

use libc::{clockid_t, timespec};

use crate::time::Time;

/// A source of time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    id: clockid_t,
}

impl Clock {
    /// Wall-clock time since the epoch; may jump backward on system clock
    /// adjustment
    pub const REALTIME: Clock = Clock {
        id: libc::CLOCK_REALTIME,
    };

    /// Non-decreasing time since an arbitrary process-local origin
    pub const MONOTONIC: Clock = Clock {
        id: libc::CLOCK_MONOTONIC,
    };

    /// CPU time consumed by the process
    pub const PROCESS: Clock = Clock {
        id: libc::CLOCK_PROCESS_CPUTIME_ID,
    };

    /// CPU time consumed by the calling thread
    pub const THREAD: Clock = Clock {
        id: libc::CLOCK_THREAD_CPUTIME_ID,
    };

    /// Read the current time from this clock.
    ///
    /// The four exposed clock kinds are always available on the supported
    /// platforms, so a failing read is unrecoverable.
    pub fn now(&self) -> Time {
        let mut ts = timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // SAFETY: ts is a valid out-pointer and id is one of the four
        // always-supported clock identifiers.
        let rc = unsafe { libc::clock_gettime(self.id, &mut ts) };
        if rc != 0 {
            let errno = std::io::Error::last_os_error();
            tracing::error!(clock_id = self.id, %errno, "clock_gettime failed");
            panic!("clock_gettime({}) failed: {errno}", self.id);
        }
        // The OS keeps tv_nsec in 0..1_000_000_000
        Time::new(ts.tv_sec as i64, ts.tv_nsec as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_clock() {
        let start = Clock::REALTIME.now();
        assert!(Clock::REALTIME.now() >= start);
        assert!(start > Time::DISTANT_PAST);
    }

    #[test]
    fn test_monotonic_clock() {
        let start = Clock::MONOTONIC.now();
        assert!(Clock::MONOTONIC.now() >= start);
    }

    #[test]
    fn test_process_clock() {
        let start = Clock::PROCESS.now();
        assert!(Clock::PROCESS.now() >= start);
    }

    #[test]
    fn test_thread_clock() {
        let start = Clock::THREAD.now();
        assert!(Clock::THREAD.now() >= start);
    }
}
