//!
//! The charted metric.
//!

///
/// The charted metric.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Operations per second.
    Iops,
    /// Mean latency used for steady state tracking.
    Latency,
    /// Mean latency.
    AverageLatency,
    /// Maximal latency.
    MaxLatency,
    /// Bandwidth.
    Throughput,
}

impl Metric {
    ///
    /// Returns the axis unit.
    ///
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Iops => "IOPS",
            Self::Latency | Self::AverageLatency | Self::MaxLatency => "us",
            Self::Throughput => "KiB/s",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iops => write!(f, "IOPS"),
            Self::Latency => write!(f, "LAT"),
            Self::AverageLatency => write!(f, "avg-LAT"),
            Self::MaxLatency => write!(f, "max-LAT"),
            Self::Throughput => write!(f, "TP"),
        }
    }
}
