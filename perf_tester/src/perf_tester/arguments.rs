//!
//! The performance tester arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The device class: `hdd` or `ssd`.
    pub device: perf_report::DeviceClass,

    /// The test name, which names every output file.
    pub testname: String,

    /// The tested device or partition.
    pub filename: PathBuf,

    /// The number of parallel jobs. Always 1 for `hdd`.
    #[arg(short, long, default_value_t = 1)]
    pub numjobs: u32,

    /// The queue depth.
    #[arg(short, long, default_value_t = 1)]
    pub iodepth: u32,

    /// Loads the results of a previous run instead of running the tests.
    #[arg(short = 'x', long)]
    pub from_document: bool,

    /// Where reloaded tests take `numjobs` and `iodepth` from: `invocation` or `document`.
    /// Requires `--from-document`.
    #[arg(long)]
    pub parameters: Option<perf_tester::ParameterSource>,

    /// Logs debug messages.
    #[arg(short, long)]
    pub debug: bool,

    /// Logs warnings and errors only.
    #[arg(short, long)]
    pub quiet: bool,

    /// The output directory. Is set to the current directory by default.
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// The run profile JSON file.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Path to the `fio` executable.
    /// Is set to `fio` by default.
    #[arg(long)]
    pub fio: Option<PathBuf>,

    /// Skips the confirmation before overwriting the device.
    #[arg(short, long)]
    pub yes: bool,
}

impl Arguments {
    ///
    /// Validate the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.numjobs == 0 {
            anyhow::bail!("The number of jobs must be positive");
        }
        if arguments.iodepth == 0 {
            anyhow::bail!("The queue depth must be positive");
        }
        if arguments.parameters.is_some() && !arguments.from_document {
            anyhow::bail!("The `--parameters` option requires `--from-document`");
        }
        if arguments.testname.is_empty()
            || arguments
                .testname
                .contains(|character: char| std::path::is_separator(character))
        {
            anyhow::bail!(
                "The test name `{}` must be a non-empty file name",
                arguments.testname
            );
        }
        Ok(arguments)
    }
}
