//!
//! The plot emitters.
//!

pub mod gnuplot;

use std::path::Path;
use std::path::PathBuf;

use crate::chart::Chart;
use crate::model::fragment::Fragment;

///
/// Renders a chart of a single test's results.
///
pub trait PlotEmitter {
    ///
    /// Renders `chart` from `fragment` into `directory`, naming the files after the suite `name`.
    ///
    /// Returns the path of the figure to reference from the report.
    ///
    fn emit(
        &mut self,
        directory: &Path,
        name: &str,
        chart: Chart,
        fragment: &Fragment,
    ) -> anyhow::Result<PathBuf>;
}
