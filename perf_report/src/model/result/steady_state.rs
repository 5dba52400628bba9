//!
//! The steady state of a tracked metric.
//!

use std::ops::RangeInclusive;

///
/// The steady state of a tracked metric over the measurement window.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteadyState {
    /// Whether the steady state has been reached.
    pub reached: bool,
    /// The first round of the measurement window.
    pub first_round: usize,
    /// The last round of the measurement window, inclusive.
    pub last_round: usize,
    /// The tracked metric, one value per round.
    pub values: Vec<f64>,
    /// The average of the tracked metric over the window.
    pub average: f64,
    /// The slope of the least-squares fit over the window.
    pub slope: f64,
    /// The intercept of the least-squares fit over the window.
    pub intercept: f64,
}

impl SteadyState {
    ///
    /// Returns the rounds of the measurement window.
    ///
    pub fn window(&self) -> RangeInclusive<usize> {
        self.first_round..=self.last_round
    }

    ///
    /// Checks that the window lies within the tracked values, one per each of `rounds`.
    ///
    pub fn validate(&self, rounds: usize) -> anyhow::Result<()> {
        if self.values.len() != rounds {
            anyhow::bail!(
                "The steady state tracks {} values over {rounds} rounds",
                self.values.len()
            );
        }
        if self.values.is_empty() {
            return Ok(());
        }
        if self.first_round > self.last_round || self.last_round >= self.values.len() {
            anyhow::bail!(
                "The steady state window {}..={} is out of the rounds 0..{}",
                self.first_round,
                self.last_round,
                self.values.len()
            );
        }
        Ok(())
    }
}
