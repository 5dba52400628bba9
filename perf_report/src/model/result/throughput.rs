//!
//! The throughput test result.
//!

use serde::Deserialize;

use crate::model::result::bandwidth::Bandwidth;
use crate::model::result::steady_state::SteadyState;
use crate::util;

///
/// The throughput test result.
///
/// Solid-state rounds are repeated measurements until steady state.
/// Rotating-disk rounds are consecutive regions of the disk.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThroughputResult {
    /// The block sizes in bytes, one per round column.
    pub block_sizes: Vec<u64>,
    /// The measured bandwidth, one row per round.
    pub rounds: Vec<Vec<Bandwidth>>,
    /// The steady state of the tracked write bandwidth.
    #[serde(deserialize_with = "Option::deserialize")]
    pub steady_state: Option<SteadyState>,
}

impl ThroughputResult {
    ///
    /// Checks that every round holds one bandwidth per block size.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        util::check_matrix(
            self.rounds.as_slice(),
            self.rounds.len(),
            self.block_sizes.len(),
        )?;
        if let Some(steady_state) = self.steady_state.as_ref() {
            steady_state.validate(self.rounds.len())?;
        }
        Ok(())
    }
}
