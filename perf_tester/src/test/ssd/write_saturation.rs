//!
//! The solid-state write saturation test.
//!

use perf_report::util::KIB;
use perf_report::DeviceClass;
use perf_report::Fragment;
use perf_report::Kind;
use perf_report::Pattern;
use perf_report::WriteSaturationResult;
use perf_report::WriteSaturationRound;

use crate::error::Error;
use crate::load_generator::LoadGenerator;
use crate::suite::parameter_source::ParameterSource;
use crate::test::context::Context;
use crate::test::DeviceTest;

///
/// The solid-state write saturation test.
///
/// Writes randomly until several times the capacity has been written.
///
#[derive(Debug)]
pub struct WriteSaturation {
    /// The test context.
    context: Context,
    /// The result, once run or restored.
    result: Option<WriteSaturationResult>,
}

impl WriteSaturation {
    /// The block size.
    pub const BLOCK_SIZE: u64 = 4 * KIB;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(context: Context) -> Self {
        Self {
            context,
            result: None,
        }
    }

    ///
    /// A boxed constructor for the constructor table.
    ///
    pub fn boxed(context: Context) -> Box<dyn DeviceTest> {
        Box::new(Self::new(context))
    }
}

impl DeviceTest for WriteSaturation {
    fn kind(&self) -> Kind {
        Kind::WriteSaturation
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn run(&mut self, generator: &mut dyn LoadGenerator) -> anyhow::Result<()> {
        self.context.start(generator)?;

        let profile = &self.context.profile;
        let capacity = crate::device::size(self.context.filename.as_path())?;
        let target = capacity.saturating_mul(profile.capacity_factor);

        let job = self
            .context
            .job(Kind::WriteSaturation, Pattern::RandWrite, Self::BLOCK_SIZE)
            .with_runtime(profile.write_saturation_runtime);
        let mut rounds = Vec::new();
        let mut written = 0u64;
        while rounds.len() < profile.write_saturation_max_rounds && written < target {
            let measurement = generator.run(&job)?;
            written = written.saturating_add(measurement.write.io_bytes);
            rounds.push(WriteSaturationRound {
                iops: measurement.write.iops,
                latency: measurement.write.latency,
                written,
            });
            tracing::info!(
                "`writesat` round {}: {:.0} IOPS, {written} of {target} bytes written",
                rounds.len(),
                measurement.write.iops
            );
        }
        if written < target {
            tracing::warn!(
                "`writesat` stopped after {} rounds with {written} of {target} bytes written",
                rounds.len()
            );
        }

        self.result = Some(WriteSaturationResult {
            block_size: Self::BLOCK_SIZE,
            capacity,
            rounds,
        });
        Ok(())
    }

    fn to_fragment(&self) -> Result<Fragment, Error> {
        Ok(Fragment::WriteSaturation(
            self.context
                .record(Kind::WriteSaturation, self.result.as_ref())?,
        ))
    }

    fn from_fragment(&mut self, fragment: Fragment, source: ParameterSource) -> Result<(), Error> {
        let found = fragment.kind();
        let Fragment::WriteSaturation(record) = fragment else {
            return Err(Error::KindMismatch {
                expected: Kind::WriteSaturation,
                found,
            });
        };
        self.result = Some(self.context.restore(DeviceClass::Ssd, record, source));
        Ok(())
    }

    fn setup_info(&self) -> String {
        let profile = &self.context.profile;
        self.context.setup_info(
            Kind::WriteSaturation,
            &[
                ("Pattern", Pattern::RandWrite.to_string()),
                (
                    "Block size",
                    perf_report::util::block_size_label(Self::BLOCK_SIZE),
                ),
                ("Runtime", format!("{} s", profile.write_saturation_runtime)),
                (
                    "Rounds",
                    format!(
                        "up to {}, or {} times the capacity written",
                        profile.write_saturation_max_rounds, profile.capacity_factor
                    ),
                ),
            ],
        )
    }
}
