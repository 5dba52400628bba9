//!
//! The performance test result payloads.
//!

pub mod bandwidth;
pub mod io_depth;
pub mod iops;
pub mod latency;
pub mod steady_state;
pub mod throughput;
pub mod write_saturation;
