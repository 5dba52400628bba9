//!
//! The IOPS test result.
//!

use serde::Deserialize;

use crate::model::result::steady_state::SteadyState;
use crate::util;

///
/// The IOPS test result.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IopsResult {
    /// The read percentages, one per matrix row.
    pub mixes: Vec<u8>,
    /// The block sizes in bytes, one per matrix column.
    pub block_sizes: Vec<u64>,
    /// The measured IOPS matrices, one per round.
    pub rounds: Vec<Vec<Vec<f64>>>,
    /// The steady state of the tracked IOPS.
    /// Rotating disks are measured without one, but the field must still be present.
    #[serde(deserialize_with = "Option::deserialize")]
    pub steady_state: Option<SteadyState>,
}

impl IopsResult {
    ///
    /// Returns the row index of the `mix` read percentage.
    ///
    pub fn mix_index(&self, mix: u8) -> Option<usize> {
        self.mixes.iter().position(|value| *value == mix)
    }

    ///
    /// Checks that every round is a mix by block size matrix with a steady state value.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        for (index, matrix) in self.rounds.iter().enumerate() {
            util::check_matrix(matrix.as_slice(), self.mixes.len(), self.block_sizes.len())
                .map_err(|error| anyhow::anyhow!("Round {}: {error}", index + 1))?;
        }
        if let Some(steady_state) = self.steady_state.as_ref() {
            steady_state.validate(self.rounds.len())?;
        }
        Ok(())
    }
}
