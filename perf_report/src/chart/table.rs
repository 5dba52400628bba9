//!
//! The chart data table.
//!

use std::fmt::Write;

///
/// The chart data table.
///
/// The first column is the abscissa, every other column is a plotted series.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The chart title.
    pub title: String,
    /// The abscissa label.
    pub x_label: String,
    /// The ordinate label.
    pub y_label: String,
    /// The column names.
    pub columns: Vec<String>,
    /// The numeric rows.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(title: String, x_label: &str, y_label: &str, columns: Vec<String>) -> Self {
        Self {
            title,
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            columns,
            rows: Vec::new(),
        }
    }

    ///
    /// Appends a row.
    ///
    pub fn push(&mut self, row: Vec<f64>) {
        self.rows.push(row);
    }

    ///
    /// Renders the table as a whitespace-separated data file with a quoted column header.
    ///
    pub fn to_data(&self) -> String {
        let mut content = String::with_capacity((self.rows.len() + 1) * self.columns.len() * 16);
        let header = self
            .columns
            .iter()
            .map(|column| format!("\"{column}\""))
            .collect::<Vec<String>>()
            .join(" ");
        content.push_str(header.as_str());
        content.push('\n');
        for row in self.rows.iter() {
            let line = row
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(&mut content, "{line}").expect("Always valid");
        }
        content
    }
}
