//!
//! The persisted document metadata.
//!

use chrono::DateTime;
use chrono::Utc;

///
/// The persisted document metadata.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// The time the suite run started.
    pub start: DateTime<Utc>,
    /// The time the suite run finished.
    pub end: DateTime<Utc>,
}

impl Metadata {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        let now = Utc::now();
        Self::new(now, now)
    }
}
