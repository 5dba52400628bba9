//!
//! The load generator job.
//!

use std::path::PathBuf;

use perf_report::Pattern;

///
/// The load generator job.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// The job name.
    pub name: String,
    /// The file the raw output is appended to, relative to the output directory.
    pub artifact: String,
    /// The tested file or device.
    pub filename: PathBuf,
    /// The access pattern.
    pub pattern: Pattern,
    /// The block size in bytes.
    pub block_size: u64,
    /// The read percentage of mixed patterns.
    pub read_percentage: Option<u8>,
    /// The number of parallel jobs.
    pub numjobs: u32,
    /// The queue depth.
    pub iodepth: u32,
    /// The duration in seconds. Unset jobs run until `size` bytes are transferred.
    pub runtime: Option<u64>,
    /// The start offset in bytes.
    pub offset: Option<u64>,
    /// The number of bytes to transfer.
    pub size: Option<u64>,
    /// The number of passes over the region.
    pub loops: Option<u32>,
}

impl Job {
    /// The I/O engine.
    pub const IO_ENGINE: &'static str = "libaio";

    ///
    /// Sets the read percentage of a mixed pattern.
    ///
    pub fn with_read_percentage(mut self, read_percentage: u8) -> Self {
        self.read_percentage = Some(read_percentage);
        self
    }

    ///
    /// Makes the job time based.
    ///
    pub fn with_runtime(mut self, runtime: u64) -> Self {
        self.runtime = Some(runtime);
        self
    }

    ///
    /// Overrides the queue depth.
    ///
    pub fn with_iodepth(mut self, iodepth: u32) -> Self {
        self.iodepth = iodepth;
        self
    }

    ///
    /// Restricts the job to `size` bytes from `offset`.
    ///
    pub fn with_region(mut self, offset: u64, size: u64) -> Self {
        self.offset = Some(offset);
        self.size = Some(size);
        self
    }

    ///
    /// Repeats the job `loops` times.
    ///
    pub fn with_loops(mut self, loops: u32) -> Self {
        self.loops = Some(loops);
        self
    }

    ///
    /// Returns the load generator command line arguments.
    ///
    pub fn arguments(&self) -> Vec<String> {
        let mut arguments = vec![
            format!("--name={}", self.name),
            format!("--filename={}", self.filename.to_string_lossy()),
            format!("--rw={}", self.pattern),
            format!("--bs={}", self.block_size),
            format!("--numjobs={}", self.numjobs),
            format!("--iodepth={}", self.iodepth),
            format!("--ioengine={}", Self::IO_ENGINE),
            "--direct=1".to_owned(),
            "--group_reporting".to_owned(),
            "--output-format=json".to_owned(),
        ];
        if let Some(read_percentage) = self.read_percentage {
            arguments.push(format!("--rwmixread={read_percentage}"));
        }
        if let Some(runtime) = self.runtime {
            arguments.push("--time_based".to_owned());
            arguments.push(format!("--runtime={runtime}"));
        }
        if let Some(offset) = self.offset {
            arguments.push(format!("--offset={offset}"));
        }
        if let Some(size) = self.size {
            arguments.push(format!("--size={size}"));
        }
        if let Some(loops) = self.loops {
            arguments.push(format!("--loops={loops}"));
        }
        arguments
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} bs={}",
            self.name,
            self.pattern,
            perf_report::util::block_size_label(self.block_size)
        )?;
        if let Some(read_percentage) = self.read_percentage {
            write!(f, " rwmixread={read_percentage}")?;
        }
        write!(f, " numjobs={} iodepth={}", self.numjobs, self.iodepth)
    }
}
