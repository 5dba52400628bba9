//!
//! The storage device performance tester library.
//!

pub mod device;
pub mod error;
pub mod load_generator;
pub mod logging;
pub mod profile;
pub mod suite;
pub mod test;

pub use crate::device::Status as DeviceStatus;
pub use crate::error::Error;
pub use crate::load_generator::fio::Fio;
pub use crate::load_generator::job::Job;
pub use crate::load_generator::measurement::Measurement;
pub use crate::load_generator::measurement::Statistics;
pub use crate::load_generator::LoadGenerator;
pub use crate::logging::Logging;
pub use crate::profile::Profile;
pub use crate::suite::parameter_source::ParameterSource;
pub use crate::suite::state::State as SuiteState;
pub use crate::suite::Suite;
pub use crate::test::context::Context as TestContext;
pub use crate::test::parameters::Parameters;
pub use crate::test::DeviceTest;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
