//!
//! The test suite state.
//!

///
/// The test suite state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No test has results.
    Empty,
    /// The tests have been run or reloaded.
    Populated,
    /// The plots and the summary have been emitted.
    Reported,
}
