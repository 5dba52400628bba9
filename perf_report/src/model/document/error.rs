//!
//! The persisted document reading error.
//!

use std::path::PathBuf;

use crate::model::kind::Kind;

///
/// The persisted document reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the document file.
    #[error("Reading document {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the document file.
        path: PathBuf,
    },
    /// Error parsing the document file, including missing and unknown fields.
    #[error("Parsing document {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the document file.
        path: PathBuf,
    },
    /// The fragment results contradict their own dimensions.
    #[error("Document {path:?} holds inconsistent `{kind}` results: {message}")]
    Inconsistent {
        /// The fragment kind.
        kind: Kind,
        /// The inconsistency description.
        message: String,
        /// The path to the document file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Document {path:?} is empty")]
    EmptyFile {
        /// The path to the document file.
        path: PathBuf,
    },
}
