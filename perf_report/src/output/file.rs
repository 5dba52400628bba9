//!
//! Represents a single output file in a set of many.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// Represents a single output file in a set of many.
///
#[derive(Debug)]
pub struct File {
    /// Path to this file relative to the output directory.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<S>(stem: S, extension: &str, content: String) -> Self
    where
        S: std::fmt::Display,
    {
        let path = format!("{stem}.{extension}").into();
        Self { path, content }
    }

    ///
    /// Writes the file into `directory`, returning the full path.
    ///
    pub fn write_to_directory(&self, directory: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(directory)
            .map_err(|error| anyhow::anyhow!("Output directory {directory:?} creating: {error}"))?;
        let path = directory.join(self.path.as_path());
        std::fs::write(path.as_path(), self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
        Ok(path)
    }
}
