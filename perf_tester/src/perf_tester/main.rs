//!
//! The performance tester executable.
//!

pub(crate) mod arguments;

use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{error:?}");
            perf_tester::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
/// Returns the exit code of the refused runs.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<i32> {
    let arguments = Arguments::validate(arguments)?;
    let directory = arguments
        .output_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let logging = perf_tester::Logging::new(
        arguments.debug,
        arguments.quiet,
        Some(directory.join(format!("{}.log", arguments.testname))),
    );
    let (dispatch, _guard) = logging.dispatch()?;
    tracing::dispatcher::with_default(&dispatch, || run(arguments, directory))
}

///
/// Runs or reloads the suite and emits the report.
///
fn run(arguments: Arguments, directory: PathBuf) -> anyhow::Result<i32> {
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let profile = match arguments.profile.as_ref() {
        Some(path) => perf_tester::Profile::try_from(path.as_path())?,
        None => perf_tester::Profile::default(),
    };
    let mut suite = perf_tester::Suite::new(
        arguments.device,
        arguments.testname.clone(),
        arguments.filename.clone(),
        directory.clone(),
        perf_tester::Parameters::new(arguments.numjobs, arguments.iodepth),
        profile,
    );
    if arguments.device == perf_report::DeviceClass::Hdd && arguments.numjobs != 1 {
        tracing::warn!("Rotating disks are tested with a single job, ignoring `--numjobs`");
    }

    if arguments.from_document {
        suite.load_from_document(arguments.parameters.unwrap_or_default())?;
        println!(
            "      {} {:?} from {:?}",
            "Loaded".bright_green().bold(),
            suite.kinds(),
            suite.document_path()
        );
    } else {
        match perf_tester::device::inspect(arguments.filename.as_path())? {
            perf_tester::DeviceStatus::Mounted => {
                tracing::warn!("{:?} is mounted, refusing to run", arguments.filename);
                eprintln!(
                    "{} {:?} or one of its partitions is mounted. Unmount it first",
                    "Warning".bright_yellow().bold(),
                    arguments.filename
                );
                return Ok(perf_tester::EXIT_CODE_SUCCESS);
            }
            perf_tester::DeviceStatus::Invalid => {
                tracing::error!("{:?} is not a block device", arguments.filename);
                eprintln!(
                    "{} {:?} is not a valid device or partition",
                    "Error".bright_red().bold(),
                    arguments.filename
                );
                return Ok(perf_tester::EXIT_CODE_FAILURE);
            }
            perf_tester::DeviceStatus::Available => {}
        }

        let mut fio = perf_tester::Fio::new(arguments.fio.clone(), directory.clone())?;
        if !arguments.yes && !confirm(arguments.filename.as_path())? {
            println!("     {} nothing was written", "Aborted".bright_yellow().bold());
            return Ok(perf_tester::EXIT_CODE_SUCCESS);
        }

        suite.run_all(&mut fio)?;
        let path = suite.serialize_all()?;
        println!("       {} {path:?}", "Saved".bright_green().bold());
    }

    suite.emit_plots(&mut perf_report::Gnuplot::new())?;
    let summary = suite.emit_summary()?;
    println!("    {} {summary:?}", "Finished".bright_green().bold());
    Ok(perf_tester::EXIT_CODE_SUCCESS)
}

///
/// Asks for the confirmation before overwriting `filename`.
///
fn confirm(filename: &Path) -> anyhow::Result<bool> {
    print!(
        "{} all data on {filename:?} will be destroyed. Continue? [y/N] ",
        "Warning".bright_yellow().bold()
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
