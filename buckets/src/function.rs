//! Construct bucket functions from a limit, a bias, and a pair of sentinels.

use crate::{Error, Formatter, Formatters, TimeUnit};
use std::time::{Duration, SystemTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of finite buckets in every bucket function.
pub const BUCKETS: usize = 4;

/// Where the finer buckets are concentrated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    /// Cut points at 1/8, 1/4, 1/2 and 1 of the limit (fine resolution near zero).
    #[default]
    Low,
    /// Cut points at 1/2, 3/4, 7/8 and 1 of the limit (fine resolution near the limit).
    High,
}

/// Labels for values outside of the finite buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sentinels {
    /// Label for negative values.
    pub below: &'static str,
    /// Label for values at or above the limit.
    pub above: &'static str,
}

impl Sentinels {
    /// Sentinels for the age of a past event.
    pub const AGE: Self = Self {
        below: "future",
        above: "old",
    };

    /// Sentinels for the latency of an operation.
    pub const LATENCY: Self = Self {
        below: "negative_latency",
        above: "slow",
    };
}

/// What the bucketed duration measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Time elapsed since some event.
    Age,
    /// Time taken by some operation.
    Latency,
}

impl Kind {
    /// Sentinels used by this kind.
    pub const fn sentinels(self) -> Sentinels {
        match self {
            Self::Age => Sentinels::AGE,
            Self::Latency => Sentinels::LATENCY,
        }
    }
}

/// Configures and constructs a [BucketFunction].
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    limit: i64,
    unit: TimeUnit,
    bias: Bias,
    sentinels: Sentinels,
    formatters: Formatters,
}

impl Builder {
    /// Create a builder for a function of `kind` bucketing values up to `limit` (in `unit`).
    pub fn new(kind: Kind, limit: i64, unit: TimeUnit) -> Self {
        Self {
            limit,
            unit,
            bias: Bias::default(),
            sentinels: kind.sentinels(),
            formatters: Formatters::default(),
        }
    }

    /// Set where the finer buckets are concentrated.
    pub fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    /// Override the sentinels implied by the kind.
    pub fn sentinels(mut self, sentinels: Sentinels) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Render labels with a custom formatter table.
    pub fn formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = formatters;
        self
    }

    /// Construct the bucket function.
    ///
    /// Returns [Error::NonPositiveLimit] if the limit is not positive.
    pub fn build(self) -> Result<BucketFunction, Error> {
        if self.limit <= 0 {
            return Err(Error::NonPositiveLimit(self.limit));
        }
        let limit = self.unit.to_nanos(self.limit);
        let formatter = self.formatters.select(limit);
        let (thresholds, labels) = thresholds(limit, self.bias, formatter);
        debug!(
            limit,
            unit = %formatter.unit(),
            width = formatter.width(),
            bias = ?self.bias,
            ?labels,
            "built bucket function"
        );
        Ok(BucketFunction {
            thresholds,
            labels,
            sentinels: self.sentinels,
        })
    }
}

/// Compute the cut points (in nanoseconds) and labels for `limit`.
///
/// Intermediate cut points are computed in the display unit of `formatter` so each one
/// matches its rendered label exactly. The final cut point is `limit` itself.
fn thresholds(
    limit: i64,
    bias: Bias,
    formatter: &Formatter,
) -> ([i64; BUCKETS], [String; BUCKETS]) {
    let v = formatter.convert(limit);
    let cuts = match bias {
        Bias::Low => [v / 8, v / 4, v / 2, v],
        Bias::High => [v - v / 2, v - v / 4, v - v / 8, v],
    };
    let scale = formatter.unit().nanos();
    let mut thresholds = cuts.map(|cut| cut * scale);
    thresholds[BUCKETS - 1] = limit;
    (thresholds, cuts.map(|cut| formatter.render(cut)))
}

/// Maps a duration (in nanoseconds) to one of six labels: a sentinel for negative values,
/// four finite buckets covering `[0, limit)`, and a sentinel for values at or above the limit.
///
/// Construct one per metric (not per measurement) with [crate::age], [crate::age_bias_old],
/// [crate::latency], [crate::latency_bias_slow] or a [Builder].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketFunction {
    thresholds: [i64; BUCKETS],
    labels: [String; BUCKETS],
    sentinels: Sentinels,
}

impl BucketFunction {
    /// Returns the label for `nanos`.
    pub fn apply(&self, nanos: i64) -> &str {
        if nanos < 0 {
            return self.sentinels.below;
        }
        self.thresholds
            .iter()
            .position(|&cut| nanos < cut)
            .map_or(self.sentinels.above, |idx| self.labels[idx].as_str())
    }

    /// Returns the label for `duration`, saturating at `i64::MAX` nanoseconds.
    pub fn apply_duration(&self, duration: Duration) -> &str {
        let nanos = i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX);
        self.apply(nanos)
    }

    /// Returns the label for the time elapsed between `start` and `end`.
    ///
    /// If the clock went backwards, the elapsed time is negative.
    pub fn apply_between(&self, start: SystemTime, end: SystemTime) -> &str {
        match end.duration_since(start) {
            Ok(elapsed) => self.apply_duration(elapsed),
            Err(_) => self.sentinels.below,
        }
    }

    /// Limit (in nanoseconds) at which values fall into the upper sentinel.
    pub fn limit(&self) -> i64 {
        self.thresholds[BUCKETS - 1]
    }

    /// Exclusive upper bounds (in nanoseconds) of the finite buckets, in ascending order.
    pub fn thresholds(&self) -> &[i64; BUCKETS] {
        &self.thresholds
    }

    /// Sentinels used for values outside of the finite buckets.
    pub fn sentinels(&self) -> Sentinels {
        self.sentinels
    }

    /// Every label this function can return, in ascending order of the values they cover.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.sentinels.below)
            .chain(self.labels.iter().map(String::as_str))
            .chain(std::iter::once(self.sentinels.above))
    }
}
