//!
//! The gnuplot plot emitter.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::chart::table::Table;
use crate::chart::Chart;
use crate::model::fragment::Fragment;
use crate::output::file::File;
use crate::output::plot::PlotEmitter;

///
/// The gnuplot plot emitter.
///
/// Writes the chart data and a script next to each other, and renders the figure
/// if the executable is available.
///
#[derive(Debug, Default)]
pub struct Gnuplot {
    /// The executable path, if found.
    executable: Option<PathBuf>,
}

impl Gnuplot {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "gnuplot";

    /// The data file extension.
    pub const EXTENSION_DATA: &'static str = "dat";

    /// The script file extension.
    pub const EXTENSION_SCRIPT: &'static str = "gp";

    ///
    /// Looks the executable up in `${PATH}`.
    ///
    pub fn new() -> Self {
        let executable = match which::which(Self::DEFAULT_EXECUTABLE_NAME) {
            Ok(executable) => Some(executable),
            Err(error) => {
                tracing::warn!(
                    "The `{}` executable not found in ${{PATH}}: {error}. Figures will not be rendered",
                    Self::DEFAULT_EXECUTABLE_NAME
                );
                None
            }
        };
        Self { executable }
    }

    ///
    /// Creates an emitter which only writes the data and scripts.
    ///
    pub fn data_only() -> Self {
        Self { executable: None }
    }

    ///
    /// Renders the plotting script.
    ///
    fn script(table: &Table, data: &Path, figure: &Path) -> String {
        format!(
            r#"set terminal pngcairo size 1024,768
set output {}
set title {}
set xlabel {}
set ylabel {}
set grid
set key outside autotitle columnhead
plot for [column=2:{}] {} using 1:column with linespoints
"#,
            Self::quote(figure.to_string_lossy().as_ref()),
            Self::quote(table.title.as_str()),
            Self::quote(table.x_label.as_str()),
            Self::quote(table.y_label.as_str()),
            table.columns.len().max(2),
            Self::quote(data.to_string_lossy().as_ref()),
        )
    }

    ///
    /// Wraps `text` into a single-quoted gnuplot string.
    ///
    fn quote(text: &str) -> String {
        format!("'{}'", text.replace('\'', "''"))
    }
}

impl PlotEmitter for Gnuplot {
    fn emit(
        &mut self,
        directory: &Path,
        name: &str,
        chart: Chart,
        fragment: &Fragment,
    ) -> anyhow::Result<PathBuf> {
        let table = chart.table(fragment)?;
        let stem = chart.file_stem(name);

        let data = File::new(stem.as_str(), Self::EXTENSION_DATA, table.to_data())
            .write_to_directory(directory)?;
        let figure = directory.join(format!("{stem}.{}", crate::EXTENSION_FIGURE));
        let script = File::new(
            stem.as_str(),
            Self::EXTENSION_SCRIPT,
            Self::script(&table, data.as_path(), figure.as_path()),
        )
        .write_to_directory(directory)?;
        tracing::debug!("Chart `{chart}` data written to {data:?}");

        if let Some(executable) = self.executable.as_ref() {
            let output = std::process::Command::new(executable)
                .arg(script.as_path())
                .output()
                .map_err(|error| {
                    anyhow::anyhow!("{executable:?} subprocess spawning error: {error:?}")
                })?;
            if !output.status.success() {
                anyhow::bail!(
                    "{executable:?} error: {}",
                    String::from_utf8_lossy(output.stderr.as_slice())
                );
            }
            tracing::info!("Chart `{chart}` rendered to {figure:?}");
        }

        Ok(figure)
    }
}
