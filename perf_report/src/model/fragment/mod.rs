//!
//! The persisted state of a single test.
//!

pub mod record;

use std::path::Path;

use crate::model::kind::Kind;
use crate::model::result::io_depth::IoDepthResult;
use crate::model::result::iops::IopsResult;
use crate::model::result::latency::LatencyResult;
use crate::model::result::throughput::ThroughputResult;
use crate::model::result::write_saturation::WriteSaturationResult;

use self::record::Record;

///
/// The persisted state of a single test, tagged with its kind.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Fragment {
    /// The IOPS test.
    #[serde(rename = "iops")]
    Iops(Record<IopsResult>),
    /// The latency test.
    #[serde(rename = "lat")]
    Latency(Record<LatencyResult>),
    /// The throughput test.
    #[serde(rename = "tp")]
    Throughput(Record<ThroughputResult>),
    /// The write saturation test.
    #[serde(rename = "writesat")]
    WriteSaturation(Record<WriteSaturationResult>),
    /// The IO depth test.
    #[serde(rename = "iod")]
    IoDepth(Record<IoDepthResult>),
}

impl Fragment {
    ///
    /// Returns the kind tag.
    ///
    pub fn kind(&self) -> Kind {
        match self {
            Self::Iops(_) => Kind::Iops,
            Self::Latency(_) => Kind::Latency,
            Self::Throughput(_) => Kind::Throughput,
            Self::WriteSaturation(_) => Kind::WriteSaturation,
            Self::IoDepth(_) => Kind::IoDepth,
        }
    }

    ///
    /// Returns the test name.
    ///
    pub fn name(&self) -> &str {
        match self {
            Self::Iops(record) => record.name.as_str(),
            Self::Latency(record) => record.name.as_str(),
            Self::Throughput(record) => record.name.as_str(),
            Self::WriteSaturation(record) => record.name.as_str(),
            Self::IoDepth(record) => record.name.as_str(),
        }
    }

    ///
    /// Returns the tested file or device.
    ///
    pub fn filename(&self) -> &Path {
        match self {
            Self::Iops(record) => record.filename.as_path(),
            Self::Latency(record) => record.filename.as_path(),
            Self::Throughput(record) => record.filename.as_path(),
            Self::WriteSaturation(record) => record.filename.as_path(),
            Self::IoDepth(record) => record.filename.as_path(),
        }
    }

    ///
    /// Returns the `numjobs` and `iodepth` run parameters.
    ///
    pub fn parameters(&self) -> (u32, u32) {
        match self {
            Self::Iops(record) => (record.numjobs, record.iodepth),
            Self::Latency(record) => (record.numjobs, record.iodepth),
            Self::Throughput(record) => (record.numjobs, record.iodepth),
            Self::WriteSaturation(record) => (record.numjobs, record.iodepth),
            Self::IoDepth(record) => (record.numjobs, record.iodepth),
        }
    }

    ///
    /// Overrides the `numjobs` and `iodepth` run parameters.
    ///
    pub fn set_parameters(&mut self, numjobs: u32, iodepth: u32) {
        let (record_numjobs, record_iodepth) = match self {
            Self::Iops(record) => (&mut record.numjobs, &mut record.iodepth),
            Self::Latency(record) => (&mut record.numjobs, &mut record.iodepth),
            Self::Throughput(record) => (&mut record.numjobs, &mut record.iodepth),
            Self::WriteSaturation(record) => (&mut record.numjobs, &mut record.iodepth),
            Self::IoDepth(record) => (&mut record.numjobs, &mut record.iodepth),
        };
        *record_numjobs = numjobs;
        *record_iodepth = iodepth;
    }

    ///
    /// Checks that the result dimensions agree with each other.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        match self {
            Self::Iops(record) => record.result.validate(),
            Self::Latency(record) => record.result.validate(),
            Self::Throughput(record) => record.result.validate(),
            Self::WriteSaturation(_) => Ok(()),
            Self::IoDepth(record) => record.result.validate(),
        }
    }
}
