//!
//! The IO depth test result.
//!

use crate::model::pattern::Pattern;
use crate::util;

///
/// The IOPS matrix of a single access pattern.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Series {
    /// The access pattern.
    pub pattern: Pattern,
    /// The IOPS, one row per IO depth, one column per block size.
    pub values: Vec<Vec<f64>>,
}

///
/// The IO depth test result.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoDepthResult {
    /// The IO depths, one per series row.
    pub io_depths: Vec<u32>,
    /// The block sizes in bytes, one per series column.
    pub block_sizes: Vec<u64>,
    /// The measured series.
    pub series: Vec<Series>,
}

impl IoDepthResult {
    ///
    /// Returns the series of `pattern`.
    ///
    pub fn series(&self, pattern: Pattern) -> Option<&Series> {
        self.series.iter().find(|series| series.pattern == pattern)
    }

    ///
    /// Checks that every series is an IO depth by block size matrix.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        for series in self.series.iter() {
            util::check_matrix(
                series.values.as_slice(),
                self.io_depths.len(),
                self.block_sizes.len(),
            )
            .map_err(|error| anyhow::anyhow!("Series `{}`: {error}", series.pattern))?;
        }
        Ok(())
    }
}
