//! Benchmark support for tempus
//!
//! Deterministic input corpora shared by the criterion benches. Spreads are
//! chosen to exercise the carry/borrow path on both sides of the second
//! boundary.

use tempus_core::{Deadline, Time, Timeout};

/// Finite intervals straddling the second boundary in both directions
pub fn timeout_corpus() -> Vec<Timeout> {
    [
        -3_600_000_000_000i64,
        -1_999_999_999,
        -1_000_000_000,
        -999_999_999,
        -1,
        0,
        1,
        999_999_999,
        1_000_000_000,
        1_999_999_999,
        3_600_000_000_000,
    ]
    .into_iter()
    .map(Timeout::nanoseconds)
    .collect()
}

/// Base times with nanosecond components spread across the sub-second range
pub fn time_corpus() -> Vec<Time> {
    (0..64)
        .map(|i| Time::new(i * 97, (i * 15_873_015) % 1_000_000_000))
        .collect()
}

/// Deadline ticks spread across the unsigned range below the sentinel
pub fn deadline_corpus() -> Vec<Deadline> {
    (0..64)
        .map(|i| Deadline::from_ticks(i * 72_057_594_037_927))
        .collect()
}

/// Valid textual literals in the canonical 9-digit form
pub fn literal_corpus() -> Vec<String> {
    (0..64)
        .map(|i: i64| Time::new(i * 1_234_567, (i * 887_503_681) % 1_000_000_000).to_string())
        .collect()
}
