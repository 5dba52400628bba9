//!
//! The write saturation test result.
//!

use crate::model::result::latency::Latency;

///
/// A single write saturation round.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Round {
    /// The write IOPS.
    pub iops: f64,
    /// The write latency.
    pub latency: Latency,
    /// The bytes written since the first round, inclusive.
    pub written: u64,
}

///
/// The write saturation test result.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteSaturationResult {
    /// The block size in bytes.
    pub block_size: u64,
    /// The target capacity in bytes.
    pub capacity: u64,
    /// The measured rounds.
    pub rounds: Vec<Round>,
}
