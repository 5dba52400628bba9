//!
//! The report utilities.
//!

/// The kibibyte size in bytes.
pub const KIB: u64 = 1024;

///
/// Formats a block size the way load generator job files spell it, e.g. `4k` or `512`.
///
pub fn block_size_label(bytes: u64) -> String {
    if bytes >= KIB && bytes % KIB == 0 {
        format!("{}k", bytes / KIB)
    } else {
        bytes.to_string()
    }
}

///
/// Returns the arithmetic mean, or zero for an empty input.
///
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

///
/// Checks that `matrix` has `rows` rows of `columns` cells each.
///
pub fn check_matrix<T>(matrix: &[Vec<T>], rows: usize, columns: usize) -> anyhow::Result<()> {
    if matrix.len() != rows {
        anyhow::bail!("Expected {rows} rows, found {}", matrix.len());
    }
    for (index, row) in matrix.iter().enumerate() {
        if row.len() != columns {
            anyhow::bail!(
                "Expected {columns} cells in row {}, found {}",
                index + 1,
                row.len()
            );
        }
    }
    Ok(())
}
