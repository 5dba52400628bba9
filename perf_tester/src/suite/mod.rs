//!
//! The device-class test suite.
//!

pub mod parameter_source;
pub mod state;

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use perf_report::DeviceClass;
use perf_report::Document;
use perf_report::DocumentMetadata;
use perf_report::Kind;
use perf_report::PlotEmitter;
use perf_report::Rst;

use crate::error::Error;
use crate::load_generator::LoadGenerator;
use crate::profile::Profile;
use crate::test::context::Context;
use crate::test::parameters::Parameters;
use crate::test::DeviceTest;

use self::parameter_source::ParameterSource;
use self::state::State;

///
/// The test suite of one device class.
///
/// Only kinds valid for the device class are ever held.
///
#[derive(Debug)]
pub struct Suite {
    /// The suite name, which names every output file.
    name: String,
    /// The tested file or device.
    filename: PathBuf,
    /// The output directory.
    directory: PathBuf,
    /// The device class.
    device: DeviceClass,
    /// The run parameters of the current invocation.
    parameters: Parameters,
    /// The run profile.
    profile: Profile,
    /// The tests.
    tests: BTreeMap<Kind, Box<dyn DeviceTest>>,
    /// The emitted figures.
    figures: BTreeMap<Kind, Vec<PathBuf>>,
    /// The run timestamps.
    metadata: DocumentMetadata,
    /// The suite state.
    state: State,
}

impl Suite {
    ///
    /// Creates a suite with an empty test of every valid kind.
    ///
    pub fn new(
        device: DeviceClass,
        name: String,
        filename: PathBuf,
        directory: PathBuf,
        parameters: Parameters,
        profile: Profile,
    ) -> Self {
        let mut suite = Self {
            name,
            filename,
            directory,
            device,
            parameters: parameters.for_device(device),
            profile,
            tests: BTreeMap::new(),
            figures: BTreeMap::new(),
            metadata: DocumentMetadata::default(),
            state: State::Empty,
        };
        suite.populate();
        suite
    }

    ///
    /// Returns the suite name.
    ///
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    ///
    /// Returns the device class.
    ///
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    ///
    /// Returns the run parameters of the current invocation.
    ///
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    ///
    /// Returns the suite state.
    ///
    pub fn state(&self) -> State {
        self.state
    }

    ///
    /// Returns the held kinds in the fixed order.
    ///
    pub fn kinds(&self) -> Vec<Kind> {
        self.tests.keys().copied().collect()
    }

    ///
    /// Returns the test of `kind`.
    ///
    pub fn test(&self, kind: Kind) -> Option<&dyn DeviceTest> {
        self.tests.get(&kind).map(|test| test.as_ref())
    }

    ///
    /// Returns the emitted figures of `kind`.
    ///
    pub fn figures(&self, kind: Kind) -> &[PathBuf] {
        self.figures
            .get(&kind)
            .map(|figures| figures.as_slice())
            .unwrap_or_default()
    }

    ///
    /// Returns the context new tests are created with.
    ///
    pub fn context(&self) -> Context {
        Context::new(
            self.name.clone(),
            self.filename.clone(),
            self.parameters,
            self.profile.clone(),
        )
    }

    ///
    /// Returns the persisted document path.
    ///
    pub fn document_path(&self) -> PathBuf {
        self.output_path(perf_report::EXTENSION_DOCUMENT)
    }

    ///
    /// Returns the summary report path.
    ///
    pub fn summary_path(&self) -> PathBuf {
        self.output_path(perf_report::EXTENSION_REPORT)
    }

    ///
    /// Adds an empty test of every valid kind not held yet.
    ///
    pub fn populate(&mut self) {
        for kind in self.device.valid_kinds().iter().copied() {
            if self.tests.contains_key(&kind) {
                continue;
            }
            if let Some(constructor) = crate::test::constructor(self.device, kind) {
                self.tests.insert(kind, constructor(self.context()));
            }
        }
    }

    ///
    /// Inserts or replaces the test of `kind`.
    ///
    pub fn add_test(&mut self, kind: Kind, test: Box<dyn DeviceTest>) -> Result<(), Error> {
        if !self.device.is_valid(kind) {
            return Err(Error::UnsupportedKind {
                device: self.device,
                kind,
            });
        }
        if test.kind() != kind {
            return Err(Error::KindMismatch {
                expected: kind,
                found: test.kind(),
            });
        }
        self.tests.insert(kind, test);
        Ok(())
    }

    ///
    /// Removes every test and figure.
    ///
    pub fn reset_tests(&mut self) {
        self.tests.clear();
        self.figures.clear();
        self.state = State::Empty;
    }

    ///
    /// Runs every held test in the fixed order, stopping at the first failure.
    ///
    pub fn run_all(&mut self, generator: &mut dyn LoadGenerator) -> anyhow::Result<()> {
        let start = chrono::Utc::now();
        for kind in self.device.valid_kinds().iter() {
            let Some(test) = self.tests.get_mut(kind) else {
                continue;
            };

            tracing::info!("Running the `{kind}` test on {:?}", self.filename);
            test.run(generator)
                .map_err(|error| anyhow::anyhow!("The `{kind}` test: {error}"))?;
            tracing::info!("The `{kind}` test finished");
        }
        self.metadata = DocumentMetadata::new(start, chrono::Utc::now());
        self.state = State::Populated;
        Ok(())
    }

    ///
    /// Builds the persisted document with the fragments in the fixed order.
    ///
    pub fn to_document(&self) -> Result<Document, Error> {
        let mut document = Document::new(self.name.clone(), self.device, self.metadata.clone());
        for kind in self.device.valid_kinds().iter() {
            if let Some(test) = self.tests.get(kind) {
                document.push(test.to_fragment()?);
            }
        }
        Ok(document)
    }

    ///
    /// Writes the persisted document to the output directory.
    ///
    pub fn serialize_all(&self) -> anyhow::Result<PathBuf> {
        let document = self.to_document()?;
        self.create_directory()?;

        let path = self.document_path();
        document.write_to_file(path.as_path())?;
        tracing::info!("Results written to {path:?}");
        Ok(path)
    }

    ///
    /// Replaces the tests with the ones persisted in the output directory.
    ///
    /// Kinds absent from the document are left out.
    ///
    pub fn load_from_document(&mut self, source: ParameterSource) -> Result<(), Error> {
        let path = self.document_path();
        let document = Document::try_from(path.as_path())?;
        if document.name != self.name {
            return Err(Error::SuiteMismatch {
                path,
                expected: self.name.clone(),
                found: document.name,
            });
        }
        if document.device != self.device {
            return Err(Error::DeviceMismatch {
                path,
                expected: self.device,
                found: document.device,
            });
        }
        for kind in document.kinds().into_iter() {
            if !self.device.is_valid(kind) {
                tracing::warn!(
                    "Ignoring the `{kind}` test of {path:?}, unsupported by `{}` suites",
                    self.device
                );
            }
        }

        let mut tests = BTreeMap::new();
        for kind in self.device.valid_kinds().iter().copied() {
            let mut fragments = document.fragments(kind);
            let Some(fragment) = fragments.next() else {
                tracing::debug!("No `{kind}` test in {path:?}");
                continue;
            };
            if fragments.next().is_some() {
                return Err(Error::DuplicateFragment { path, kind });
            }
            let Some(constructor) = crate::test::constructor(self.device, kind) else {
                continue;
            };

            if fragment.filename() != self.filename.as_path() {
                tracing::warn!(
                    "The `{kind}` test of {path:?} was run on {:?}, not {:?}",
                    fragment.filename(),
                    self.filename
                );
            }

            let mut test = constructor(self.context());
            test.from_fragment(fragment.clone(), source)?;
            tests.insert(kind, test);
        }

        self.reset_tests();
        self.tests = tests;
        self.metadata = document.metadata;
        self.state = State::Populated;
        tracing::info!("Results of {:?} loaded from {path:?}", self.kinds());
        Ok(())
    }

    ///
    /// Emits every chart of every held test.
    ///
    pub fn emit_plots(&mut self, emitter: &mut dyn PlotEmitter) -> anyhow::Result<()> {
        self.create_directory()?;
        self.figures.clear();
        for (kind, test) in self.tests.iter() {
            let fragment = test.to_fragment()?;
            for chart in self.device.charts(*kind).iter().copied() {
                let figure =
                    emitter.emit(self.directory.as_path(), self.name.as_str(), chart, &fragment)?;
                self.figures.entry(*kind).or_default().push(figure);
            }
        }
        Ok(())
    }

    ///
    /// Writes the summary report anchored on the IOPS test.
    ///
    /// The IOPS test must have been run or loaded.
    ///
    pub fn emit_summary(&mut self) -> Result<PathBuf, Error> {
        let anchor = self
            .tests
            .get(&Kind::Iops)
            .ok_or_else(|| Error::MissingAnchor {
                suite: self.name.clone(),
            })?;
        anchor.to_fragment()?;

        let mut rst = Rst::default();
        rst.add_title(format!("Performance Test Report: {}", self.name).as_str());
        rst.add_paragraph(
            format!(
                "Generated on {} for the {} device {}.",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                self.device,
                self.filename.to_string_lossy()
            )
            .as_str(),
        );
        rst.add_paragraph(
            format!(
                "Measured from {} to {}.",
                self.metadata.start.format("%Y-%m-%d %H:%M:%S UTC"),
                self.metadata.end.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .as_str(),
        );
        rst.add_setup_info(anchor.setup_info().as_str());

        for kind in self.tests.keys().copied() {
            rst.add_chapter(kind.title());
            if let Some(figure) = self.lead_figure(kind) {
                rst.add_figure(
                    figure.as_path(),
                    format!("{} of {}", kind.title(), self.name).as_str(),
                );
            }
        }

        self.create_directory()?;
        let path = self.summary_path();
        rst.write_to_file(path.as_path())
            .map_err(|error| Error::Writing {
                error,
                path: path.clone(),
            })?;
        self.state = State::Reported;
        tracing::info!("Summary written to {path:?}");
        Ok(path)
    }

    ///
    /// Returns the figure of the first chart of `kind`, relative to the output directory.
    ///
    fn lead_figure(&self, kind: Kind) -> Option<PathBuf> {
        let figure = match self.figures.get(&kind).and_then(|figures| figures.first()) {
            Some(figure) => figure.to_owned(),
            None => {
                let chart = self.device.charts(kind).first()?;
                self.directory.join(format!(
                    "{}.{}",
                    chart.file_stem(self.name.as_str()),
                    perf_report::EXTENSION_FIGURE
                ))
            }
        };
        let relative = figure
            .strip_prefix(self.directory.as_path())
            .ok()
            .map(Path::to_path_buf);
        Some(relative.unwrap_or(figure))
    }

    fn output_path(&self, extension: &str) -> PathBuf {
        self.directory.join(format!("{}.{extension}", self.name))
    }

    fn create_directory(&self) -> Result<(), Error> {
        std::fs::create_dir_all(self.directory.as_path()).map_err(|error| Error::Writing {
            error,
            path: self.directory.clone(),
        })
    }
}
