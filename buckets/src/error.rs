//! Error types for constructing bucket functions

use thiserror::Error;

/// Error type for bucket function construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("limit must be positive: {0}")]
    NonPositiveLimit(i64),
    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
    #[error("invalid formatter table: {0}")]
    InvalidTable(&'static str),
}
