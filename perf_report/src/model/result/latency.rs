//!
//! The latency test result.
//!

use crate::model::result::steady_state::SteadyState;
use crate::util;

///
/// Latency statistics, in microseconds.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Latency {
    /// The mean latency.
    pub mean: f64,
    /// The minimal latency.
    pub min: f64,
    /// The maximal latency.
    pub max: f64,
}

impl Latency {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(mean: f64, min: f64, max: f64) -> Self {
        Self { mean, min, max }
    }
}

///
/// The latency test result.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatencyResult {
    /// The read percentages, one per matrix row.
    pub mixes: Vec<u8>,
    /// The block sizes in bytes, one per matrix column.
    pub block_sizes: Vec<u64>,
    /// The measured matrices, one per round.
    pub rounds: Vec<Vec<Vec<Latency>>>,
    /// The steady state of the tracked mean latency.
    pub steady_state: SteadyState,
}

impl LatencyResult {
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
        self.steady_state.validate(self.rounds.len())
    }
}
