//!
//! The persisted performance test model.
//!

pub mod device_class;
pub mod document;
pub mod fragment;
pub mod kind;
pub mod pattern;
pub mod result;
