//!
//! The I/O access pattern.
//!

///
/// The I/O access pattern, named after the load generator `rw` values.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Sequential reads.
    Read,
    /// Sequential writes.
    Write,
    /// Random reads.
    RandRead,
    /// Random writes.
    RandWrite,
    /// Random mixed reads and writes.
    RandRw,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::RandRead => write!(f, "randread"),
            Self::RandWrite => write!(f, "randwrite"),
            Self::RandRw => write!(f, "randrw"),
        }
    }
}
