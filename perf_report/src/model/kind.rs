//!
//! The performance test kind.
//!

///
/// The performance test kind.
///
/// The declaration order is the order tests are run and serialized in.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Kind {
    /// Random mixed workload IOPS.
    #[serde(rename = "iops")]
    Iops,
    /// Response time.
    #[serde(rename = "lat")]
    Latency,
    /// Sequential throughput.
    #[serde(rename = "tp")]
    Throughput,
    /// Sustained random writes.
    #[serde(rename = "writesat")]
    WriteSaturation,
    /// Queue depth sweep.
    #[serde(rename = "iod")]
    IoDepth,
}

impl Kind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Iops,
        Self::Latency,
        Self::Throughput,
        Self::WriteSaturation,
        Self::IoDepth,
    ];

    ///
    /// Returns the report chapter title.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Self::Iops => "IOPS",
            Self::Latency => "Latency",
            Self::Throughput => "Throughput",
            Self::WriteSaturation => "Write Saturation",
            Self::IoDepth => "IO Depth",
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "iops" => Ok(Self::Iops),
            "lat" => Ok(Self::Latency),
            "tp" => Ok(Self::Throughput),
            "writesat" => Ok(Self::WriteSaturation),
            "iod" => Ok(Self::IoDepth),
            string => anyhow::bail!(
                "Unknown test kind `{string}`. Supported kinds: {}",
                Self::ALL
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iops => write!(f, "iops"),
            Self::Latency => write!(f, "lat"),
            Self::Throughput => write!(f, "tp"),
            Self::WriteSaturation => write!(f, "writesat"),
            Self::IoDepth => write!(f, "iod"),
        }
    }
}
