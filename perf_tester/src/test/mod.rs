//!
//! The single performance test.
//!


use perf_report::DeviceClass;
use perf_report::Fragment;
use perf_report::Kind;
use perf_report::Pattern;

use crate::error::Error;
use crate::load_generator::measurement::Measurement;
use crate::load_generator::LoadGenerator;
use crate::suite::parameter_source::ParameterSource;

use self::context::Context;

///
/// The single performance test of one kind and device class.
///
pub trait DeviceTest: std::fmt::Debug {
    ///
    /// Returns the test kind.
    ///
    fn kind(&self) -> Kind;

    ///
    /// Returns the test context.
    ///
    fn context(&self) -> &Context;

    ///
    /// Runs every job of the workload and keeps the result.
    ///
    fn run(&mut self, generator: &mut dyn LoadGenerator) -> anyhow::Result<()>;

    ///
    /// Returns the persisted state of the test.
    ///
    /// Fails if the test has neither been run nor restored.
    ///
    fn to_fragment(&self) -> Result<Fragment, Error>;

    ///
    /// Restores the result from a persisted state of the same kind.
    ///
    fn from_fragment(&mut self, fragment: Fragment, source: ParameterSource) -> Result<(), Error>;

    ///
    /// Describes the job configuration.
    ///
    fn setup_info(&self) -> String;
}

///
/// The single test constructor.
///
pub type Constructor = fn(Context) -> Box<dyn DeviceTest>;

/// The solid-state test constructors.
static SSD_CONSTRUCTORS: [(Kind, Constructor); 5] = [
    (Kind::Iops, ssd::iops::Iops::boxed as Constructor),
    (Kind::Latency, ssd::latency::Latency::boxed as Constructor),
    (Kind::Throughput, ssd::throughput::Throughput::boxed as Constructor),
    (
        Kind::WriteSaturation,
        ssd::write_saturation::WriteSaturation::boxed as Constructor,
    ),
    (Kind::IoDepth, ssd::io_depth::IoDepth::boxed as Constructor),
];

/// The rotating-disk test constructors.
static HDD_CONSTRUCTORS: [(Kind, Constructor); 2] = [
    (Kind::Iops, hdd::iops::Iops::boxed as Constructor),
    (Kind::Throughput, hdd::throughput::Throughput::boxed as Constructor),
];

///
/// Returns the constructor of the `kind` test for the `device` class.
///
pub fn constructor(device: DeviceClass, kind: Kind) -> Option<Constructor> {
    let table: &[(Kind, Constructor)] = match device {
        DeviceClass::Ssd => &SSD_CONSTRUCTORS,
        DeviceClass::Hdd => &HDD_CONSTRUCTORS,
    };
    table
        .iter()
        .find(|(table_kind, _)| *table_kind == kind)
        .map(|(_, constructor)| *constructor)
}

///
/// Runs a random mixed workload over every read percentage and block size.
///
/// Returns one row per read percentage and one column per block size.
///
pub(crate) fn measure_mixes<T, F>(
    context: &Context,
    kind: Kind,
    mixes: &[u8],
    block_sizes: &[u64],
    generator: &mut dyn LoadGenerator,
    value: F,
) -> anyhow::Result<Vec<Vec<T>>>
where
    F: Fn(&Measurement) -> T,
{
    let mut matrix = Vec::with_capacity(mixes.len());
    for mix in mixes.iter() {
        let mut row = Vec::with_capacity(block_sizes.len());
        for block_size in block_sizes.iter() {
            let job = context
                .job(kind, Pattern::RandRw, *block_size)
                .with_read_percentage(*mix)
                .with_runtime(context.profile.runtime);
            row.push(value(&generator.run(&job)?));
        }
        matrix.push(row);
    }
    Ok(matrix)
}

///
/// Formats a list of values for the setup description.
///
pub(crate) fn list<T>(values: &[T]) -> String
where
    T: std::fmt::Display,
{
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
