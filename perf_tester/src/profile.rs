//!
//! The run profile.
//!

use std::path::Path;

///
/// The run profile, tuning the duration and extent of the workloads.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// The duration of a single measurement in seconds.
    pub runtime: u64,
    /// The maximal number of rounds of the steady state tests.
    pub max_rounds: usize,
    /// The number of rounds the steady state is evaluated over.
    pub steady_state_window: usize,
    /// Whether to precondition the target before the steady state tests.
    pub precondition: bool,
    /// The duration of a single write saturation round in seconds.
    pub write_saturation_runtime: u64,
    /// The maximal number of write saturation rounds.
    pub write_saturation_max_rounds: usize,
    /// The write saturation stops after writing this many times the capacity.
    pub capacity_factor: u64,
    /// The IO depths of the IO depth sweep.
    pub io_depths: Vec<u32>,
    /// The number of rounds of the rotating-disk IOPS test.
    pub hdd_rounds: usize,
    /// The number of regions the rotating-disk throughput test splits the target into.
    pub hdd_regions: usize,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            runtime: 60,
            max_rounds: 25,
            steady_state_window: 5,
            precondition: true,
            write_saturation_runtime: 60,
            write_saturation_max_rounds: 1440,
            capacity_factor: 4,
            io_depths: vec![1, 2, 4, 8, 16, 32, 64],
            hdd_rounds: 1,
            hdd_regions: 128,
        }
    }
}

impl Profile {
    ///
    /// Checks the profile values.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.runtime == 0 || self.write_saturation_runtime == 0 {
            anyhow::bail!("The measurement runtime must be positive");
        }
        if self.max_rounds == 0 || self.write_saturation_max_rounds == 0 || self.hdd_rounds == 0 {
            anyhow::bail!("The number of rounds must be positive");
        }
        if self.steady_state_window < 2 {
            anyhow::bail!(
                "The steady state window must span at least 2 rounds, found {}",
                self.steady_state_window
            );
        }
        if self.io_depths.is_empty() || self.io_depths.contains(&0) {
            anyhow::bail!("The IO depths must be a non-empty list of positive values");
        }
        if self.hdd_regions == 0 {
            anyhow::bail!("The number of disk regions must be positive");
        }
        Ok(self)
    }
}

impl TryFrom<&Path> for Profile {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Profile file {path:?} reading: {error}"))?;
        let profile: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Profile file {path:?} parsing: {error}"))?;
        profile.validate()
    }
}
