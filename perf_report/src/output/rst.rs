//!
//! The reStructuredText report writer.
//!

use std::fmt::Write;
use std::path::Path;

///
/// The reStructuredText report writer.
///
#[derive(Debug, Default)]
pub struct Rst {
    /// The report text.
    content: String,
}

impl Rst {
    ///
    /// Adds the document title, with an overline and an underline.
    ///
    pub fn add_title(&mut self, title: &str) {
        let line = "=".repeat(title.chars().count());
        writeln!(&mut self.content, "{line}\n{title}\n{line}\n").expect("Always valid");
    }

    ///
    /// Adds a paragraph.
    ///
    pub fn add_paragraph(&mut self, text: &str) {
        writeln!(&mut self.content, "{text}\n").expect("Always valid");
    }

    ///
    /// Adds the setup section with the job configuration rendered as a literal block.
    ///
    pub fn add_setup_info(&mut self, info: &str) {
        self.add_chapter("Setup");
        self.content.push_str("::\n\n");
        for line in info.lines() {
            writeln!(&mut self.content, "    {line}").expect("Always valid");
        }
        self.content.push('\n');
    }

    ///
    /// Adds a chapter heading.
    ///
    pub fn add_chapter(&mut self, title: &str) {
        let line = "-".repeat(title.chars().count());
        writeln!(&mut self.content, "{title}\n{line}\n").expect("Always valid");
    }

    ///
    /// Adds a figure referencing an image file.
    ///
    pub fn add_figure(&mut self, path: &Path, caption: &str) {
        writeln!(
            &mut self.content,
            ".. figure:: {}\n    :scale: 65%\n\n    {caption}\n",
            path.to_string_lossy()
        )
        .expect("Always valid");
    }

    ///
    /// Returns the report text.
    ///
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.content.as_str())
    }
}
