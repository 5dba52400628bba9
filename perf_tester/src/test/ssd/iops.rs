//!
//! The solid-state IOPS test.
//!

use perf_report::util::KIB;
use perf_report::DeviceClass;
use perf_report::Fragment;
use perf_report::IopsResult;
use perf_report::Kind;
use perf_report::SteadyState;

use crate::error::Error;
use crate::load_generator::LoadGenerator;
use crate::suite::parameter_source::ParameterSource;
use crate::test::context::Context;
use crate::test::steady_state::Detector;
use crate::test::DeviceTest;

///
/// The solid-state IOPS test.
///
/// Repeats the random mixed workload matrix until the 4k random write IOPS are steady.
///
#[derive(Debug)]
pub struct Iops {
    /// The test context.
    context: Context,
    /// The result, once run or restored.
    result: Option<IopsResult>,
}

impl Iops {
    /// The read percentages.
    pub const MIXES: [u8; 7] = [100, 95, 65, 50, 35, 5, 0];

    /// The block sizes.
    pub const BLOCK_SIZES: [u64; 8] = [
        1024 * KIB,
        128 * KIB,
        64 * KIB,
        32 * KIB,
        16 * KIB,
        8 * KIB,
        4 * KIB,
        512,
    ];

    /// The tracked cell: 0% read, 4k.
    pub const TRACKED: (usize, usize) = (6, 6);

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

impl DeviceTest for Iops {
    fn kind(&self) -> Kind {
        Kind::Iops
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn run(&mut self, generator: &mut dyn LoadGenerator) -> anyhow::Result<()> {
        self.context.start(generator)?;
        self.context.precondition(Kind::Iops, generator)?;

        let detector = Detector::new(self.context.profile.steady_state_window);
        let mut rounds = Vec::with_capacity(self.context.profile.max_rounds);
        let mut tracked = Vec::with_capacity(self.context.profile.max_rounds);
        let mut steady_state = SteadyState::default();
        for round in 1..=self.context.profile.max_rounds {
            let matrix = crate::test::measure_mixes(
                &self.context,
                Kind::Iops,
                &Self::MIXES,
                &Self::BLOCK_SIZES,
                generator,
                |measurement| measurement.iops(),
            )?;
            let value = matrix[Self::TRACKED.0][Self::TRACKED.1];
            tracing::info!("`iops` round {round}: {value:.0} IOPS at 4k random write");

            tracked.push(value);
            rounds.push(matrix);
            steady_state = detector.detect(tracked.as_slice());
            if steady_state.reached {
                tracing::info!("`iops` steady state reached in round {round}");
                break;
            }
        }
        if !steady_state.reached {
            tracing::warn!(
                "`iops` steady state not reached in {} rounds",
                self.context.profile.max_rounds
            );
        }

        self.result = Some(IopsResult {
            mixes: Self::MIXES.to_vec(),
            block_sizes: Self::BLOCK_SIZES.to_vec(),
            rounds,
            steady_state: Some(steady_state),
        });
        Ok(())
    }

    fn to_fragment(&self) -> Result<Fragment, Error> {
        Ok(Fragment::Iops(
            self.context.record(Kind::Iops, self.result.as_ref())?,
        ))
    }

    fn from_fragment(&mut self, fragment: Fragment, source: ParameterSource) -> Result<(), Error> {
        let found = fragment.kind();
        let Fragment::Iops(record) = fragment else {
            return Err(Error::KindMismatch {
                expected: Kind::Iops,
                found,
            });
        };
        self.result = Some(self.context.restore(DeviceClass::Ssd, record, source));
        Ok(())
    }

    fn setup_info(&self) -> String {
        let profile = &self.context.profile;
        self.context.setup_info(
            Kind::Iops,
            &[
                ("Pattern", "randrw".to_owned()),
                ("Read mixes", format!("{} %", crate::test::list(&Self::MIXES))),
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
                (
                    "Preconditioning",
                    if profile.precondition { "yes" } else { "no" }.to_owned(),
                ),
            ],
        )
    }
}
