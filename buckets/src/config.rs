//! Declare bucket functions in configuration files.

use crate::{Bias, BucketFunction, Builder, Error, Kind, TimeUnit};
use serde::{Deserialize, Serialize};

/// Serializable description of a bucket function.
///
/// ```yaml
/// kind: latency
/// limit: 250
/// unit: ms
/// bias: high
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub kind: Kind,
    pub limit: i64,
    pub unit: TimeUnit,
    #[serde(default)]
    pub bias: Bias,
}

impl Config {
    /// Construct the described bucket function.
    pub fn build(&self) -> Result<BucketFunction, Error> {
        Builder::new(self.kind, self.limit, self.unit)
            .bias(self.bias)
            .build()
    }
}
