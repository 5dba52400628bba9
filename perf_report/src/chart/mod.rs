//!
//! The chart catalogue.
//!

pub mod metric;
pub mod table;

use crate::model::fragment::Fragment;
use crate::model::pattern::Pattern;
use crate::model::result::steady_state::SteadyState;
use crate::util;

use self::metric::Metric;
use self::table::Table;

/// The write-only mix row tracked for steady state.
const WRITE_ONLY_MIX: u8 = 0;

///
/// A chart rendered from the results of a single test.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chart {
    /// The tracked metric over the measurement window with its average, limits and fit.
    SteadyStateVerification(Metric),
    /// The write-only row of every block size over all rounds.
    SteadyStateConvergence(Metric),
    /// The mix by block size matrix averaged over the measurement window.
    Measurement2D(Metric),
    /// The bandwidth of one direction for every block size over all rounds.
    ThroughputConvergence(Pattern),
    /// The read and write bandwidth by block size averaged over the measurement window.
    ThroughputMeasurement2D,
    /// The write IOPS over the saturation rounds.
    WriteSaturationIops,
    /// The write latency over the saturation rounds.
    WriteSaturationLatency,
    /// The IOPS by IO depth and block size of one access pattern.
    IoDepthMeasurement(Pattern),
    /// The rotating-disk mix by block size matrix averaged over all rounds.
    HddIops,
    /// The rotating-disk bandwidth by disk region.
    HddThroughput,
}

impl Chart {
    ///
    /// Returns the figure file stem for the suite `name`.
    ///
    pub fn file_stem(&self, name: &str) -> String {
        format!("{name}-{self}")
    }

    ///
    /// Extracts the chart data from a test fragment.
    ///
    pub fn table(&self, fragment: &Fragment) -> anyhow::Result<Table> {
        let table = match (self, fragment) {
            (Self::SteadyStateVerification(metric), fragment) => {
                let steady_state = match fragment {
                    Fragment::Iops(record) => record.result.steady_state.as_ref(),
                    Fragment::Latency(record) => Some(&record.result.steady_state),
                    Fragment::Throughput(record) => record.result.steady_state.as_ref(),
                    _ => None,
                }
                .ok_or_else(|| {
                    anyhow::anyhow!("The `{}` results have no steady state", fragment.kind())
                })?;
                Self::steady_state_verification(*metric, steady_state)
            }
            (Self::SteadyStateConvergence(metric @ Metric::Iops), Fragment::Iops(record)) => {
                let result = &record.result;
                let row = Self::write_only_row(result.mix_index(WRITE_ONLY_MIX))?;
                let mut table = Self::by_block_size(
                    format!("{metric} steady state convergence"),
                    "round",
                    metric.unit(),
                    result.block_sizes.as_slice(),
                );
                for (index, matrix) in result.rounds.iter().enumerate() {
                    let mut values = vec![(index + 1) as f64];
                    values.extend(Self::row(matrix, row)?.iter().copied());
                    table.push(values);
                }
                table
            }
            (
                Self::SteadyStateConvergence(metric @ Metric::Latency),
                Fragment::Latency(record),
            ) => {
                let result = &record.result;
                let row = Self::write_only_row(result.mix_index(WRITE_ONLY_MIX))?;
                let mut table = Self::by_block_size(
                    format!("{metric} steady state convergence"),
                    "round",
                    metric.unit(),
                    result.block_sizes.as_slice(),
                );
                for (index, matrix) in result.rounds.iter().enumerate() {
                    let mut values = vec![(index + 1) as f64];
                    values.extend(Self::row(matrix, row)?.iter().map(|latency| latency.mean));
                    table.push(values);
                }
                table
            }
            (Self::Measurement2D(metric @ Metric::Iops), Fragment::Iops(record)) => {
                let result = &record.result;
                let rounds =
                    Self::window(result.rounds.as_slice(), result.steady_state.as_ref())?;
                let mut table = Self::by_block_size(
                    format!("{metric} measurement"),
                    "read %",
                    metric.unit(),
                    result.block_sizes.as_slice(),
                );
                for (row, mix) in result.mixes.iter().enumerate() {
                    let mut values = vec![*mix as f64];
                    for column in 0..result.block_sizes.len() {
                        let cells = rounds
                            .iter()
                            .map(|matrix| Self::cell(matrix, row, column))
                            .collect::<anyhow::Result<Vec<f64>>>()?;
                        values.push(util::average(cells));
                    }
                    table.push(values);
                }
                table
            }
            (
                Self::Measurement2D(metric @ (Metric::AverageLatency | Metric::MaxLatency)),
                Fragment::Latency(record),
            ) => {
                let result = &record.result;
                let rounds = Self::window(result.rounds.as_slice(), Some(&result.steady_state))?;
                let mut table = Self::by_block_size(
                    format!("{metric} measurement"),
                    "read %",
                    metric.unit(),
                    result.block_sizes.as_slice(),
                );
                for (row, mix) in result.mixes.iter().enumerate() {
                    let mut values = vec![*mix as f64];
                    for column in 0..result.block_sizes.len() {
                        let cells = rounds
                            .iter()
                            .map(|matrix| -> anyhow::Result<f64> {
                                let latency = Self::cell(matrix, row, column)?;
                                Ok(if *metric == Metric::MaxLatency {
                                    latency.max
                                } else {
                                    latency.mean
                                })
                            })
                            .collect::<anyhow::Result<Vec<f64>>>()?;
                        values.push(util::average(cells));
                    }
                    table.push(values);
                }
                table
            }
            (Self::ThroughputConvergence(pattern), Fragment::Throughput(record)) => {
                let result = &record.result;
                let mut table = Self::by_block_size(
                    format!("TP {pattern} steady state convergence"),
                    "round",
                    Metric::Throughput.unit(),
                    result.block_sizes.as_slice(),
                );
                for (index, round) in result.rounds.iter().enumerate() {
                    let mut values = vec![(index + 1) as f64];
                    values.extend(round.iter().map(|bandwidth| match pattern {
                        Pattern::Read | Pattern::RandRead => bandwidth.read,
                        _ => bandwidth.write,
                    }));
                    table.push(values);
                }
                table
            }
            (Self::ThroughputMeasurement2D, Fragment::Throughput(record)) => {
                let result = &record.result;
                let rounds =
                    Self::window(result.rounds.as_slice(), result.steady_state.as_ref())?;
                let mut table = Table::new(
                    "TP measurement".to_owned(),
                    "block size",
                    Metric::Throughput.unit(),
                    vec!["block size".to_owned(), "read".to_owned(), "write".to_owned()],
                );
                for (column, block_size) in result.block_sizes.iter().enumerate() {
                    let cells = rounds
                        .iter()
                        .map(|round| {
                            round.get(column).copied().ok_or_else(|| {
                                anyhow::anyhow!("The throughput results have no column {column}")
                            })
                        })
                        .collect::<anyhow::Result<Vec<_>>>()?;
                    table.push(vec![
                        *block_size as f64,
                        util::average(cells.iter().map(|bandwidth| bandwidth.read)),
                        util::average(cells.iter().map(|bandwidth| bandwidth.write)),
                    ]);
                }
                table
            }
            (Self::WriteSaturationIops, Fragment::WriteSaturation(record)) => {
                let mut table = Table::new(
                    "Write saturation IOPS".to_owned(),
                    "round",
                    Metric::Iops.unit(),
                    vec!["round".to_owned(), "IOPS".to_owned()],
                );
                for (index, round) in record.result.rounds.iter().enumerate() {
                    table.push(vec![(index + 1) as f64, round.iops]);
                }
                table
            }
            (Self::WriteSaturationLatency, Fragment::WriteSaturation(record)) => {
                let mut table = Table::new(
                    "Write saturation latency".to_owned(),
                    "round",
                    Metric::Latency.unit(),
                    vec!["round".to_owned(), "mean".to_owned(), "max".to_owned()],
                );
                for (index, round) in record.result.rounds.iter().enumerate() {
                    table.push(vec![
                        (index + 1) as f64,
                        round.latency.mean,
                        round.latency.max,
                    ]);
                }
                table
            }
            (Self::IoDepthMeasurement(pattern), Fragment::IoDepth(record)) => {
                let result = &record.result;
                let series = result.series(*pattern).ok_or_else(|| {
                    anyhow::anyhow!("The IO depth results have no `{pattern}` series")
                })?;
                let mut table = Self::by_block_size(
                    format!("IO depth {pattern} measurement"),
                    "io depth",
                    Metric::Iops.unit(),
                    result.block_sizes.as_slice(),
                );
                for (io_depth, row) in result.io_depths.iter().zip(series.values.iter()) {
                    let mut values = vec![*io_depth as f64];
                    values.extend(row.iter().copied());
                    table.push(values);
                }
                table
            }
            (Self::HddIops, Fragment::Iops(record)) => {
                let result = &record.result;
                let mut table = Self::by_block_size(
                    "IOPS measurement".to_owned(),
                    "read %",
                    Metric::Iops.unit(),
                    result.block_sizes.as_slice(),
                );
                for (row, mix) in result.mixes.iter().enumerate() {
                    let mut values = vec![*mix as f64];
                    for column in 0..result.block_sizes.len() {
                        let cells = result
                            .rounds
                            .iter()
                            .map(|matrix| Self::cell(matrix, row, column))
                            .collect::<anyhow::Result<Vec<f64>>>()?;
                        values.push(util::average(cells));
                    }
                    table.push(values);
                }
                table
            }
            (Self::HddThroughput, Fragment::Throughput(record)) => {
                let mut table = Table::new(
                    "TP by disk region".to_owned(),
                    "region",
                    Metric::Throughput.unit(),
                    vec!["region".to_owned(), "read".to_owned(), "write".to_owned()],
                );
                for (index, round) in record.result.rounds.iter().enumerate() {
                    let bandwidth = round.first().ok_or_else(|| {
                        anyhow::anyhow!("The throughput region {} is empty", index + 1)
                    })?;
                    table.push(vec![(index + 1) as f64, bandwidth.read, bandwidth.write]);
                }
                table
            }
            (chart, fragment) => anyhow::bail!(
                "Chart `{chart}` cannot be drawn from `{}` results",
                fragment.kind()
            ),
        };
        Ok(table)
    }

    ///
    /// Builds the steady state verification table.
    ///
    fn steady_state_verification(metric: Metric, steady_state: &SteadyState) -> Table {
        let mut table = Table::new(
            format!("{metric} steady state verification"),
            "round",
            metric.unit(),
            vec![
                "round".to_owned(),
                metric.to_string(),
                "average".to_owned(),
                "120% average".to_owned(),
                "80% average".to_owned(),
                "slope".to_owned(),
            ],
        );
        let average = steady_state.average;
        for round in steady_state.window() {
            let Some(value) = steady_state.values.get(round) else {
                break;
            };
            table.push(vec![
                (round + 1) as f64,
                *value,
                average,
                average * 1.2,
                average * 0.8,
                steady_state.slope * round as f64 + steady_state.intercept,
            ]);
        }
        table
    }

    ///
    /// Creates a table with one series per block size.
    ///
    fn by_block_size(title: String, x_label: &str, y_label: &str, block_sizes: &[u64]) -> Table {
        let mut columns = Vec::with_capacity(block_sizes.len() + 1);
        columns.push(x_label.to_owned());
        columns.extend(block_sizes.iter().copied().map(util::block_size_label));
        Table::new(title, x_label, y_label, columns)
    }

    ///
    /// Unwraps the write-only mix row index.
    ///
    fn write_only_row(index: Option<usize>) -> anyhow::Result<usize> {
        index.ok_or_else(|| anyhow::anyhow!("The results have no write-only mix"))
    }

    ///
    /// Returns the `row` of a round matrix.
    ///
    fn row<T>(matrix: &[Vec<T>], row: usize) -> anyhow::Result<&[T]> {
        matrix
            .get(row)
            .map(Vec::as_slice)
            .ok_or_else(|| anyhow::anyhow!("The results have no row {row}"))
    }

    ///
    /// Returns the cell of a round matrix.
    ///
    fn cell<T: Copy>(matrix: &[Vec<T>], row: usize, column: usize) -> anyhow::Result<T> {
        matrix
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!("The results have no cell at row {row}, column {column}")
            })
    }

    ///
    /// Returns the rounds of the measurement window, or all rounds without a steady state.
    ///
    fn window<'a, T>(
        rounds: &'a [T],
        steady_state: Option<&SteadyState>,
    ) -> anyhow::Result<&'a [T]> {
        let Some(steady_state) = steady_state else {
            return Ok(rounds);
        };
        if rounds.is_empty() {
            return Ok(rounds);
        }
        rounds.get(steady_state.window()).ok_or_else(|| {
            anyhow::anyhow!(
                "The measurement window {}..={} is out of the {} rounds",
                steady_state.first_round,
                steady_state.last_round,
                rounds.len()
            )
        })
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SteadyStateVerification(metric) => write!(
                f,
                "{}-steady-state-verification",
                metric.to_string().to_lowercase()
            ),
            Self::SteadyStateConvergence(metric) => write!(
                f,
                "{}-steady-state-convergence",
                metric.to_string().to_lowercase()
            ),
            Self::Measurement2D(metric) => {
                write!(f, "{}-measurement", metric.to_string().to_lowercase())
            }
            Self::ThroughputConvergence(pattern) => write!(f, "tp-{pattern}-convergence"),
            Self::ThroughputMeasurement2D => write!(f, "tp-measurement"),
            Self::WriteSaturationIops => write!(f, "writesat-iops"),
            Self::WriteSaturationLatency => write!(f, "writesat-lat"),
            Self::IoDepthMeasurement(pattern) => write!(f, "iod-{pattern}-measurement"),
            Self::HddIops => write!(f, "hdd-iops"),
            Self::HddThroughput => write!(f, "hdd-tp"),
        }
    }
}
