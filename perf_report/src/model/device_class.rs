//!
//! The tested device class.
//!

use crate::chart::metric::Metric;
use crate::chart::Chart;
use crate::model::kind::Kind;
use crate::model::pattern::Pattern;

///
/// The tested device class.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Rotating disk.
    Hdd,
    /// Solid-state drive.
    Ssd,
}

impl DeviceClass {
    ///
    /// Returns the kinds valid for the device class, in run and serialization order.
    ///
    pub fn valid_kinds(&self) -> &'static [Kind] {
        match self {
            Self::Hdd => &[Kind::Iops, Kind::Throughput],
            Self::Ssd => &Kind::ALL,
        }
    }

    ///
    /// Whether `kind` belongs to the device class.
    ///
    pub fn is_valid(&self, kind: Kind) -> bool {
        self.valid_kinds().contains(&kind)
    }

    ///
    /// Returns the charts rendered for the results of `kind`.
    ///
    /// The first chart is the lead figure of the report chapter.
    ///
    pub fn charts(&self, kind: Kind) -> &'static [Chart] {
        match (self, kind) {
            (Self::Ssd, Kind::Iops) => &[
                Chart::SteadyStateVerification(Metric::Iops),
                Chart::SteadyStateConvergence(Metric::Iops),
                Chart::Measurement2D(Metric::Iops),
            ],
            (Self::Ssd, Kind::Latency) => &[
                Chart::SteadyStateVerification(Metric::Latency),
                Chart::SteadyStateConvergence(Metric::Latency),
                Chart::Measurement2D(Metric::AverageLatency),
                Chart::Measurement2D(Metric::MaxLatency),
            ],
            (Self::Ssd, Kind::Throughput) => &[
                Chart::SteadyStateVerification(Metric::Throughput),
                Chart::ThroughputConvergence(Pattern::Read),
                Chart::ThroughputConvergence(Pattern::Write),
                Chart::ThroughputMeasurement2D,
            ],
            (Self::Ssd, Kind::WriteSaturation) => {
                &[Chart::WriteSaturationIops, Chart::WriteSaturationLatency]
            }
            (Self::Ssd, Kind::IoDepth) => &[
                Chart::IoDepthMeasurement(Pattern::Read),
                Chart::IoDepthMeasurement(Pattern::Write),
                Chart::IoDepthMeasurement(Pattern::RandRead),
                Chart::IoDepthMeasurement(Pattern::RandWrite),
            ],
            (Self::Hdd, Kind::Iops) => &[Chart::HddIops],
            (Self::Hdd, Kind::Throughput) => &[Chart::HddThroughput],
            (Self::Hdd, _) => &[],
        }
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "hdd" => Ok(Self::Hdd),
            "ssd" => Ok(Self::Ssd),
            string => anyhow::bail!(
                "Unknown device class `{string}`. Supported device classes: {}",
                [Self::Hdd, Self::Ssd]
                    .into_iter()
                    .map(|device| device.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hdd => write!(f, "hdd"),
            Self::Ssd => write!(f, "ssd"),
        }
    }
}
