//!
//! The performance test report library.
//!

pub mod chart;
pub mod model;
pub mod output;
pub mod util;

pub use crate::chart::metric::Metric as ChartMetric;
pub use crate::chart::table::Table as ChartTable;
pub use crate::chart::Chart;
pub use crate::model::device_class::DeviceClass;
pub use crate::model::document::error::Error as DocumentError;
pub use crate::model::document::metadata::Metadata as DocumentMetadata;
pub use crate::model::document::Document;
pub use crate::model::fragment::record::Record;
pub use crate::model::fragment::Fragment;
pub use crate::model::kind::Kind;
pub use crate::model::pattern::Pattern;
pub use crate::model::result::bandwidth::Bandwidth;
pub use crate::model::result::io_depth::IoDepthResult;
pub use crate::model::result::io_depth::Series as IoDepthSeries;
pub use crate::model::result::iops::IopsResult;
pub use crate::model::result::latency::Latency;
pub use crate::model::result::latency::LatencyResult;
pub use crate::model::result::steady_state::SteadyState;
pub use crate::model::result::throughput::ThroughputResult;
pub use crate::model::result::write_saturation::Round as WriteSaturationRound;
pub use crate::model::result::write_saturation::WriteSaturationResult;
pub use crate::output::file::File as OutputFile;
pub use crate::output::plot::gnuplot::Gnuplot;
pub use crate::output::plot::PlotEmitter;
pub use crate::output::rst::Rst;

/// The persisted document file extension.
pub const EXTENSION_DOCUMENT: &str = "json";

/// The formatted report file extension.
pub const EXTENSION_REPORT: &str = "rst";

/// The rendered figure file extension.
pub const EXTENSION_FIGURE: &str = "png";
