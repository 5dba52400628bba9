//!
//! The fio load generator.
//!

pub mod output;

use std::io::Write;
use std::path::PathBuf;

use crate::load_generator::job::Job;
use crate::load_generator::measurement::Measurement;
use crate::load_generator::LoadGenerator;

use self::output::Output;

///
/// The fio load generator.
///
#[derive(Debug)]
pub struct Fio {
    /// The executable path.
    executable: PathBuf,
    /// The directory the raw job outputs are appended to.
    directory: PathBuf,
    /// The version string, cached after the first query.
    version: Option<String>,
}

impl Fio {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "fio";

    /// The first supported version, which introduced the nanosecond latency reports.
    pub const FIRST_SUPPORTED_VERSION: semver::Version = semver::Version::new(3, 0, 0);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: Option<PathBuf>, directory: PathBuf) -> anyhow::Result<Self> {
        let executable = executable.unwrap_or_else(|| Self::DEFAULT_EXECUTABLE_NAME.into());
        let executable = which::which(executable.as_path()).map_err(|error| {
            anyhow::anyhow!("The `{executable:?}` executable not found in ${{PATH}}: {error}")
        })?;
        Ok(Self {
            executable,
            directory,
            version: None,
        })
    }

    ///
    /// Parses the semantic version out of a `fio-3.33` version string.
    ///
    pub fn parse_version(version: &str) -> anyhow::Result<semver::Version> {
        let numbers = version
            .trim()
            .trim_start_matches("fio-")
            .split(|character: char| !character.is_ascii_digit() && character != '.')
            .next()
            .unwrap_or_default();
        let mut components = numbers
            .split('.')
            .filter(|component| !component.is_empty())
            .map(|component| component.parse::<u64>());
        let major = components
            .next()
            .transpose()?
            .ok_or_else(|| anyhow::anyhow!("Unknown fio version `{version}`"))?;
        let minor = components.next().transpose()?.unwrap_or_default();
        let patch = components.next().transpose()?.unwrap_or_default();
        Ok(semver::Version::new(major, minor, patch))
    }

    ///
    /// Appends the raw job output to its artifact file.
    ///
    fn append_artifact(&self, job: &Job, stdout: &[u8]) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Output directory {:?} creating: {error}", self.directory)
        })?;
        let path = self.directory.join(job.artifact.as_str());
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_path())
            .map_err(|error| anyhow::anyhow!("Artifact file {path:?} opening: {error}"))?;
        file.write_all(stdout)
            .map_err(|error| anyhow::anyhow!("Artifact file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl LoadGenerator for Fio {
    fn version(&mut self) -> anyhow::Result<String> {
        if let Some(version) = self.version.as_ref() {
            return Ok(version.to_owned());
        }

        let output = std::process::Command::new(self.executable.as_path())
            .arg("--version")
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{:?} subprocess spawning error: {error:?}", self.executable)
            })?;
        if !output.status.success() {
            anyhow::bail!(
                "{:?} version getting error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        let version = String::from_utf8_lossy(output.stdout.as_slice())
            .trim()
            .to_owned();
        let semantic = Self::parse_version(version.as_str())?;
        if semantic < Self::FIRST_SUPPORTED_VERSION {
            anyhow::bail!(
                "fio version `{version}` is not supported. Please use {} or newer",
                Self::FIRST_SUPPORTED_VERSION
            );
        }
        tracing::debug!("Using {version} at {:?}", self.executable);

        self.version = Some(version.clone());
        Ok(version)
    }

    fn run(&mut self, job: &Job) -> anyhow::Result<Measurement> {
        tracing::debug!("Running job: {job}");

        let output = std::process::Command::new(self.executable.as_path())
            .args(job.arguments())
            .output()
            .map_err(|error| {
                anyhow::anyhow!("{:?} subprocess spawning error: {error:?}", self.executable)
            })?;
        self.append_artifact(job, output.stdout.as_slice())?;
        if !output.status.success() {
            anyhow::bail!(
                "{:?} job `{job}` error: {}",
                self.executable,
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        let measurement = Output::parse(stdout.as_ref())
            .map_err(|error| anyhow::anyhow!("Job `{job}`: {error}"))?
            .measurement();
        tracing::debug!(
            "Job `{job}` finished: {:.0} IOPS, {:.0} KiB/s read, {:.0} KiB/s write",
            measurement.iops(),
            measurement.read.bandwidth,
            measurement.write.bandwidth
        );
        Ok(measurement)
    }
}
