//!
//! The load generator measurement.
//!

use perf_report::Latency;

///
/// The statistics of one direction.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Operations per second.
    pub iops: f64,
    /// Bandwidth in KiB/s.
    pub bandwidth: f64,
    /// Completion latency in microseconds.
    pub latency: Latency,
    /// Transferred bytes.
    pub io_bytes: u64,
}

///
/// The load generator measurement.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The read statistics.
    pub read: Statistics,
    /// The write statistics.
    pub write: Statistics,
}

impl Measurement {
    ///
    /// Returns the total IOPS.
    ///
    pub fn iops(&self) -> f64 {
        self.read.iops + self.write.iops
    }

    ///
    /// Returns the latency of both directions, with the mean weighted by IOPS.
    ///
    pub fn latency(&self) -> Latency {
        let directions = [self.read, self.write]
            .into_iter()
            .filter(|statistics| statistics.iops > 0.0)
            .collect::<Vec<Statistics>>();
        if directions.is_empty() {
            return Latency::default();
        }

        let iops: f64 = directions.iter().map(|statistics| statistics.iops).sum();
        let mean = directions
            .iter()
            .map(|statistics| statistics.latency.mean * statistics.iops)
            .sum::<f64>()
            / iops;
        let min = directions
            .iter()
            .map(|statistics| statistics.latency.min)
            .fold(f64::INFINITY, f64::min);
        let max = directions
            .iter()
            .map(|statistics| statistics.latency.max)
            .fold(0.0, f64::max);
        Latency::new(mean, min, max)
    }
}
