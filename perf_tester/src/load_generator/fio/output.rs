//!
//! The fio JSON output.
//!

use perf_report::Latency;

use crate::load_generator::measurement::Measurement;
use crate::load_generator::measurement::Statistics;

/// The nanoseconds in a microsecond.
const NANOSECONDS_PER_MICROSECOND: f64 = 1_000.0;

///
/// The fio JSON output.
///
#[derive(Debug, serde::Deserialize)]
pub struct Output {
    /// The fio version string.
    #[serde(rename = "fio version")]
    pub version: String,
    /// The job reports.
    pub jobs: Vec<Job>,
}

///
/// The report of a single job, or of a job group with `--group_reporting`.
///
#[derive(Debug, serde::Deserialize)]
pub struct Job {
    /// The job name.
    #[serde(rename = "jobname")]
    pub name: String,
    /// The read direction.
    pub read: Direction,
    /// The write direction.
    pub write: Direction,
}

///
/// The statistics of one direction.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct Direction {
    /// Transferred bytes.
    pub io_bytes: u64,
    /// Bandwidth in KiB/s.
    pub bw: f64,
    /// Operations per second.
    pub iops: f64,
    /// The total latency in nanoseconds.
    #[serde(default)]
    pub lat_ns: LatencyNs,
}

///
/// The latency statistics in nanoseconds.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct LatencyNs {
    /// The minimal latency.
    pub min: f64,
    /// The maximal latency.
    pub max: f64,
    /// The mean latency.
    pub mean: f64,
}

impl Output {
    ///
    /// Parses the output, skipping any warnings fio prints before the JSON object.
    ///
    pub fn parse(stdout: &str) -> anyhow::Result<Self> {
        let start = stdout
            .find('{')
            .ok_or_else(|| anyhow::anyhow!("fio output contains no JSON object"))?;
        let output: Self = serde_json::from_str(&stdout[start..])
            .map_err(|error| anyhow::anyhow!("fio output parsing error: {error}"))?;
        if output.jobs.is_empty() {
            anyhow::bail!("fio output contains no job reports");
        }
        Ok(output)
    }

    ///
    /// Aggregates the job reports.
    ///
    pub fn measurement(&self) -> Measurement {
        Measurement {
            read: Self::aggregate(self.jobs.iter().map(|job| &job.read)),
            write: Self::aggregate(self.jobs.iter().map(|job| &job.write)),
        }
    }

    fn aggregate<'a, I>(directions: I) -> Statistics
    where
        I: Iterator<Item = &'a Direction>,
    {
        let mut statistics = Statistics::default();
        let mut weighted_mean = 0.0;
        let mut min = f64::INFINITY;
        for direction in directions.filter(|direction| direction.iops > 0.0) {
            statistics.iops += direction.iops;
            statistics.bandwidth += direction.bw;
            statistics.io_bytes += direction.io_bytes;
            weighted_mean += direction.lat_ns.mean * direction.iops;
            min = min.min(direction.lat_ns.min);
            statistics.latency.max = statistics.latency.max.max(direction.lat_ns.max);
        }
        if statistics.iops > 0.0 {
            statistics.latency = Latency::new(
                weighted_mean / statistics.iops / NANOSECONDS_PER_MICROSECOND,
                min / NANOSECONDS_PER_MICROSECOND,
                statistics.latency.max / NANOSECONDS_PER_MICROSECOND,
            );
        }
        statistics
    }
}
