//!
//! The performance tester error.
//!

use std::path::PathBuf;

///
/// The performance tester error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The kind does not belong to the suite's device class.
    #[error("Test kind `{kind}` is not supported by `{device}` suites")]
    UnsupportedKind {
        /// The suite device class.
        device: perf_report::DeviceClass,
        /// The rejected kind.
        kind: perf_report::Kind,
    },
    /// The test or fragment kind differs from the expected one.
    #[error("Expected a `{expected}` test, found `{found}`")]
    KindMismatch {
        /// The expected kind.
        expected: perf_report::Kind,
        /// The actual kind.
        found: perf_report::Kind,
    },
    /// The test has neither been run nor loaded.
    #[error("The `{kind}` test has no results yet")]
    NotRun {
        /// The test kind.
        kind: perf_report::Kind,
    },
    /// The summary anchor test is missing.
    #[error("Suite `{suite}` has no `iops` test to anchor the summary")]
    MissingAnchor {
        /// The suite name.
        suite: String,
    },
    /// The document belongs to another suite.
    #[error("Document {path:?} belongs to suite `{found}`, expected `{expected}`")]
    SuiteMismatch {
        /// The document path.
        path: PathBuf,
        /// The expected suite name.
        expected: String,
        /// The document suite name.
        found: String,
    },
    /// The document was written for another device class.
    #[error("Document {path:?} holds `{found}` results, expected `{expected}`")]
    DeviceMismatch {
        /// The document path.
        path: PathBuf,
        /// The suite device class.
        expected: perf_report::DeviceClass,
        /// The document device class.
        found: perf_report::DeviceClass,
    },
    /// The document holds more than one fragment of a kind.
    #[error("Document {path:?} holds more than one `{kind}` test")]
    DuplicateFragment {
        /// The document path.
        path: PathBuf,
        /// The duplicated kind.
        kind: perf_report::Kind,
    },
    /// The document cannot be read.
    #[error(transparent)]
    Document(#[from] perf_report::DocumentError),
    /// An output file cannot be written.
    #[error("Writing {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The output file path.
        path: PathBuf,
    },
}
