//!
//! The report and plot emitters.
//!

pub mod file;
pub mod plot;
pub mod rst;
