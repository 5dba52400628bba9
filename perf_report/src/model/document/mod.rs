//!
//! The persisted performance test document.
//!

pub mod error;
pub mod metadata;

use std::path::Path;

use crate::model::device_class::DeviceClass;
use crate::model::fragment::Fragment;
use crate::model::kind::Kind;

use self::error::Error as DocumentError;
use self::metadata::Metadata;

///
/// The persisted performance test document.
///
/// The root is keyed by the suite name, with one fragment per test kind.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// The suite name.
    pub name: String,
    /// The tested device class.
    pub device: DeviceClass,
    /// The run metadata.
    pub metadata: Metadata,
    /// The test fragments.
    pub tests: Vec<Fragment>,
}

impl Document {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, device: DeviceClass, metadata: Metadata) -> Self {
        Self {
            name,
            device,
            metadata,
            tests: Vec::new(),
        }
    }

    ///
    /// Appends a test fragment.
    ///
    pub fn push(&mut self, fragment: Fragment) {
        self.tests.push(fragment);
    }

    ///
    /// Returns the fragments tagged with `kind`.
    ///
    pub fn fragments(&self, kind: Kind) -> impl Iterator<Item = &Fragment> {
        self.tests
            .iter()
            .filter(move |fragment| fragment.kind() == kind)
    }

    ///
    /// Returns the fragment kinds in document order.
    ///
    pub fn kinds(&self) -> Vec<Kind> {
        self.tests.iter().map(Fragment::kind).collect()
    }

    ///
    /// Writes the document to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self).expect("Always valid");
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Document file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl TryFrom<&Path> for Document {
    type Error = DocumentError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| DocumentError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(DocumentError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let document: Self =
            serde_json::from_str(text.as_str()).map_err(|error| DocumentError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        for fragment in document.tests.iter() {
            fragment
                .validate()
                .map_err(|error| DocumentError::Inconsistent {
                    kind: fragment.kind(),
                    message: error.to_string(),
                    path: path.to_path_buf(),
                })?;
        }
        Ok(document)
    }
}
