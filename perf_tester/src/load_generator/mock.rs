//!
//! The constant load generator for tests.
//!

use perf_report::Latency;
use perf_report::Pattern;

use crate::load_generator::job::Job;
use crate::load_generator::measurement::Measurement;
use crate::load_generator::measurement::Statistics;
use crate::load_generator::LoadGenerator;

///
/// The load generator which measures every job the same.
///
#[derive(Debug, Default)]
pub struct Mock {
    /// The jobs run so far.
    pub jobs: Vec<Job>,
    /// The number of jobs after which every run fails.
    pub fail_after: Option<usize>,
}

impl Mock {
    /// The version string.
    pub const VERSION: &'static str = "fio-3.33";

    /// The IOPS of each direction.
    pub const IOPS: f64 = 1000.0;

    /// The bandwidth of each direction in KiB/s.
    pub const BANDWIDTH: f64 = 4000.0;

    /// The bytes transferred in each direction.
    pub const IO_BYTES: u64 = 1 << 20;

    ///
    /// Creates a generator which fails once `jobs` jobs have run.
    ///
    pub fn failing_after(jobs: usize) -> Self {
        Self {
            jobs: Vec::new(),
            fail_after: Some(jobs),
        }
    }

    fn statistics() -> Statistics {
        Statistics {
            iops: Self::IOPS,
            bandwidth: Self::BANDWIDTH,
            latency: Latency::new(50.0, 10.0, 200.0),
            io_bytes: Self::IO_BYTES,
        }
    }
}

impl LoadGenerator for Mock {
    fn version(&mut self) -> anyhow::Result<String> {
        Ok(Self::VERSION.to_owned())
    }

    fn run(&mut self, job: &Job) -> anyhow::Result<Measurement> {
        if let Some(fail_after) = self.fail_after {
            if self.jobs.len() >= fail_after {
                anyhow::bail!("Job `{job}` failed");
            }
        }
        self.jobs.push(job.clone());

        let (reads, writes) = match job.pattern {
            Pattern::Read | Pattern::RandRead => (true, false),
            Pattern::Write | Pattern::RandWrite => (false, true),
            Pattern::RandRw => match job.read_percentage {
                Some(100) => (true, false),
                Some(0) => (false, true),
                _ => (true, true),
            },
        };
        let mut measurement = Measurement::default();
        if reads {
            measurement.read = Self::statistics();
        }
        if writes {
            measurement.write = Self::statistics();
        }
        Ok(measurement)
    }
}
