//!
//! The solid-state throughput test.
//!

use perf_report::util::KIB;
use perf_report::Bandwidth;
use perf_report::DeviceClass;
use perf_report::Fragment;
use perf_report::Kind;
use perf_report::Pattern;
use perf_report::SteadyState;
use perf_report::ThroughputResult;

use crate::error::Error;
use crate::load_generator::LoadGenerator;
use crate::suite::parameter_source::ParameterSource;
use crate::test::context::Context;
use crate::test::steady_state::Detector;
use crate::test::DeviceTest;

///
/// The solid-state throughput test.
///
/// Every round writes and then reads sequentially with each block size.
///
#[derive(Debug)]
pub struct Throughput {
    /// The test context.
    context: Context,
    /// The result, once run or restored.
    result: Option<ThroughputResult>,
}

impl Throughput {
    /// The block sizes.
    pub const BLOCK_SIZES: [u64; 5] = [1024 * KIB, 64 * KIB, 8 * KIB, 4 * KIB, 512];

    /// The tracked column: 1024k.
    pub const TRACKED: usize = 0;

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

    ///
    /// Measures one round over all block sizes.
    ///
    fn round(&self, generator: &mut dyn LoadGenerator) -> anyhow::Result<Vec<Bandwidth>> {
        let mut bandwidths = Vec::with_capacity(Self::BLOCK_SIZES.len());
        for block_size in Self::BLOCK_SIZES.into_iter() {
            let write = self
                .context
                .job(Kind::Throughput, Pattern::Write, block_size)
                .with_runtime(self.context.profile.runtime);
            let write = generator.run(&write)?.write.bandwidth;

            let read = self
                .context
                .job(Kind::Throughput, Pattern::Read, block_size)
                .with_runtime(self.context.profile.runtime);
            let read = generator.run(&read)?.read.bandwidth;

            bandwidths.push(Bandwidth::new(read, write));
        }
        Ok(bandwidths)
    }
}

impl DeviceTest for Throughput {
    fn kind(&self) -> Kind {
        Kind::Throughput
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn run(&mut self, generator: &mut dyn LoadGenerator) -> anyhow::Result<()> {
        self.context.start(generator)?;
        self.context.precondition(Kind::Throughput, generator)?;

        let detector = Detector::new(self.context.profile.steady_state_window);
        let mut rounds = Vec::with_capacity(self.context.profile.max_rounds);
        let mut tracked = Vec::with_capacity(self.context.profile.max_rounds);
        let mut steady_state = SteadyState::default();
        for round in 1..=self.context.profile.max_rounds {
            let bandwidths = self.round(generator)?;
            let value = bandwidths[Self::TRACKED].write;
            tracing::info!("`tp` round {round}: {value:.0} KiB/s at 1024k sequential write");

            tracked.push(value);
            rounds.push(bandwidths);
            steady_state = detector.detect(tracked.as_slice());
            if steady_state.reached {
                tracing::info!("`tp` steady state reached in round {round}");
                break;
            }
        }
        if !steady_state.reached {
            tracing::warn!(
                "`tp` steady state not reached in {} rounds",
                self.context.profile.max_rounds
            );
        }

        self.result = Some(ThroughputResult {
            block_sizes: Self::BLOCK_SIZES.to_vec(),
            rounds,
            steady_state: Some(steady_state),
        });
        Ok(())
    }

    fn to_fragment(&self) -> Result<Fragment, Error> {
        Ok(Fragment::Throughput(
            self.context.record(Kind::Throughput, self.result.as_ref())?,
        ))
    }

    fn from_fragment(&mut self, fragment: Fragment, source: ParameterSource) -> Result<(), Error> {
        let found = fragment.kind();
        let Fragment::Throughput(record) = fragment else {
            return Err(Error::KindMismatch {
                expected: Kind::Throughput,
                found,
            });
        };
        self.result = Some(self.context.restore(DeviceClass::Ssd, record, source));
        Ok(())
    }

    fn setup_info(&self) -> String {
        let profile = &self.context.profile;
        self.context.setup_info(
            Kind::Throughput,
            &[
                ("Pattern", "write, then read".to_owned()),
                (
                    "Block sizes",
                    crate::test::context::block_size_list(&Self::BLOCK_SIZES),
                ),
                ("Runtime", format!("{} s", profile.runtime)),
                (
                    "Rounds",
                    format!(
                        "up to {}, steady state over {}",
                        profile.max_rounds, profile.steady_state_window
                    ),
                ),
            ],
        )
    }
}
