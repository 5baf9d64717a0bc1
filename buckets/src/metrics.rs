//! Count observations per bucket with `prometheus-client`.

use crate::BucketFunction;
use prometheus_client::{
    encoding::EncodeLabelSet,
    metrics::{counter::Counter as PrometheusCounter, family::Family},
};
use std::time::{Duration, SystemTime};

/// Metric label holding the bucket an observation fell into.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Label {
    /// The rendered bucket (e.g. `"015s"` or `"slow"`).
    bucket: String,
}

impl Label {
    /// Create a new label for `bucket`.
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
        }
    }

    /// Get the bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// A counter family keyed by the bucket of each observed duration.
///
/// Registering the family (see [Counter::family]) is left to the caller.
#[derive(Clone, Debug)]
pub struct Counter {
    function: BucketFunction,
    family: Family<Label, PrometheusCounter>,
}

impl Counter {
    /// Create a counter that buckets observations with `function`.
    pub fn new(function: BucketFunction) -> Self {
        Self {
            function,
            family: Family::default(),
        }
    }

    /// The family to register (cloning shares the underlying counters).
    pub fn family(&self) -> Family<Label, PrometheusCounter> {
        self.family.clone()
    }

    /// The bucket function used to label observations.
    pub fn function(&self) -> &BucketFunction {
        &self.function
    }

    /// Record a duration of `nanos` nanoseconds.
    pub fn record(&self, nanos: i64) {
        self.increment(self.function.apply(nanos));
    }

    /// Record `duration`.
    pub fn record_duration(&self, duration: Duration) {
        self.increment(self.function.apply_duration(duration));
    }

    /// Record the time elapsed between `start` and `end`.
    ///
    /// If the clock went backwards, the observation lands in the lower sentinel.
    pub fn record_between(&self, start: SystemTime, end: SystemTime) {
        self.increment(self.function.apply_between(start, end));
    }

    /// Current count for `bucket`.
    pub fn get(&self, bucket: &str) -> u64 {
        self.family.get_or_create(&Label::new(bucket)).get()
    }

    fn increment(&self, bucket: &str) {
        self.family.get_or_create(&Label::new(bucket)).inc();
    }
}
