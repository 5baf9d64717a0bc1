//! Map durations to bounded, human-readable metric labels.
//!
//! # Overview
//!
//! A bucket function converts an elapsed duration (in nanoseconds) into one of six labels so it
//! can be used as a dimension on a counter without unbounded cardinality:
//! - a sentinel for negative values (`future` for ages, `negative_latency` for latencies)
//! - four finite buckets covering `[0, limit)`
//! - a sentinel for values at or above the limit (`old` for ages, `slow` for latencies)
//!
//! The display unit and zero-padded width of the finite labels are chosen from the magnitude of
//! the limit (see [Formatters]), so all labels of a function sort lexicographically.
//!
//! # Bias
//!
//! [age] and [latency] place finer buckets near zero (cut points at 1/8, 1/4, 1/2 and 1 of the
//! limit). [age_bias_old] and [latency_bias_slow] place finer buckets near the limit (cut
//! points at 1/2, 3/4, 7/8 and 1 of the limit).
//!
//! # Example
//!
//! ```
//! use commonware_buckets::{latency, TimeUnit};
//!
//! let f = latency(100, TimeUnit::Milliseconds).unwrap();
//! assert_eq!(f.apply(TimeUnit::Milliseconds.to_nanos(-1)), "negative_latency");
//! assert_eq!(f.apply(TimeUnit::Milliseconds.to_nanos(1)), "012ms");
//! assert_eq!(f.apply(TimeUnit::Milliseconds.to_nanos(30)), "050ms");
//! assert_eq!(f.apply(TimeUnit::Milliseconds.to_nanos(100)), "slow");
//! ```

mod error;
pub use error::Error;
mod unit;
pub use unit::TimeUnit;
mod formatter;
pub use formatter::{Formatter, Formatters};
mod function;
pub use function::{Bias, BucketFunction, Builder, Kind, Sentinels, BUCKETS};
pub mod config;
pub mod metrics;

/// Bucket the age of an event, with finer buckets for recent events.
///
/// Values below zero are `future` and values at or above `limit` are `old`.
pub fn age(limit: i64, unit: TimeUnit) -> Result<BucketFunction, Error> {
    Builder::new(Kind::Age, limit, unit).build()
}

/// Bucket the age of an event, with finer buckets for events close to `limit`.
pub fn age_bias_old(limit: i64, unit: TimeUnit) -> Result<BucketFunction, Error> {
    Builder::new(Kind::Age, limit, unit)
        .bias(Bias::High)
        .build()
}

/// Bucket the latency of an operation, with finer buckets for fast operations.
///
/// Values below zero are `negative_latency` and values at or above `limit` are `slow`.
pub fn latency(limit: i64, unit: TimeUnit) -> Result<BucketFunction, Error> {
    Builder::new(Kind::Latency, limit, unit).build()
}

/// Bucket the latency of an operation, with finer buckets for operations close to `limit`.
pub fn latency_bias_slow(limit: i64, unit: TimeUnit) -> Result<BucketFunction, Error> {
    Builder::new(Kind::Latency, limit, unit)
        .bias(Bias::High)
        .build()
}
