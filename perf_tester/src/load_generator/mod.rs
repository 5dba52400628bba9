//!
//! The I/O load generator.
//!

pub mod fio;
pub mod job;
pub mod measurement;
#[cfg(test)]
pub(crate) mod mock;

use self::job::Job;
use self::measurement::Measurement;

///
/// The I/O load generator the tests measure the device with.
///
pub trait LoadGenerator {
    ///
    /// Returns the load generator version string.
    ///
    fn version(&mut self) -> anyhow::Result<String>;

    ///
    /// Runs a single job to completion and returns its measurement.
    ///
    fn run(&mut self, job: &Job) -> anyhow::Result<Measurement>;
}
