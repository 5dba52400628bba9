//!
//! The read and write bandwidth pair.
//!

///
/// The read and write bandwidth pair, in KiB/s.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bandwidth {
    /// The read bandwidth.
    pub read: f64,
    /// The write bandwidth.
    pub write: f64,
}

impl Bandwidth {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(read: f64, write: f64) -> Self {
        Self { read, write }
    }
}
