//!
//! The serialized state of a single test.
//!

use std::path::PathBuf;

///
/// The serialized state of a single test.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record<T> {
    /// The test name, which is the name of the suite.
    pub name: String,
    /// The tested file or device.
    pub filename: PathBuf,
    /// The number of load generator jobs.
    pub numjobs: u32,
    /// The load generator queue depth.
    pub iodepth: u32,
    /// The load generator version the result was measured with.
    pub fio_version: String,
    /// The result payload.
    pub result: T,
}
